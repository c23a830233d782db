use crate::reports;

pub fn run() {
    println!("\n📋 === SURVEY FIELDS === 📋");
    reports::print_field_catalog();
}
