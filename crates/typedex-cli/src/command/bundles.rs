use crate::data::GameData;

pub(crate) fn run(data: &GameData) {
    println!("{:>3}  {:<16} {:<7} {:<6} {:>7}", "ID", "Name", "Tag", "Data", "Records");
    for bundle in data.catalog.iter() {
        println!(
            "{:>3}  {:<16} {:<7} {:<6} {:>7}",
            bundle.id().to_string(),
            bundle.name(),
            bundle.tag().to_string(),
            bundle.quality().to_string(),
            bundle.records().len()
        );
    }
}
