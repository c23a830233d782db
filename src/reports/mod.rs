use cardio_risk::pipeline::{Submission, FEATURE_ORDER};
use cardio_risk::protocol::{PredictionResult, DISCLAIMER};
use cardio_risk::survey::Field;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use strum::IntoEnumIterator;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn format_value(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{:.0}", v)
    } else {
        format!("{}", v)
    }
}

pub fn print_field_catalog() {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Field").add_attribute(Attribute::Bold),
        Cell::new("Kind"),
        Cell::new("Prompt"),
        Cell::new("Options"),
    ]);

    for field in Field::iter() {
        let options = field
            .options()
            .iter()
            .map(|c| format!("{} = {}", c.code, c.label))
            .collect::<Vec<_>>()
            .join("\n");

        table.add_row(vec![
            Cell::new(field.to_string()).add_attribute(Attribute::Bold),
            Cell::new(field.kind().to_string()),
            Cell::new(field.prompt()),
            Cell::new(options),
        ]);
    }
    println!("{}", table);
}

pub fn print_submission(submission: &Submission) {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("#"),
        Cell::new("Feature").add_attribute(Attribute::Bold),
        Cell::new("Value").fg(Color::Cyan),
    ]);

    for (i, (field, value)) in FEATURE_ORDER
        .iter()
        .zip(submission.features.values())
        .enumerate()
    {
        let mut value_cell = Cell::new(format_value(*value)).fg(Color::Cyan);
        if *field == Field::Bmi {
            value_cell = value_cell.add_attribute(Attribute::Bold);
        }
        table.add_row(vec![Cell::new(i), Cell::new(field.to_string()), value_cell]);
    }

    for i in [0, 2] {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    println!("{}", table);
    println!("BMI: {:.2}", submission.bmi);
    match serde_json::to_string(&submission.request()) {
        Ok(body) => println!("Request body: {}", body),
        Err(e) => eprintln!("❌ Failed to encode request: {}", e),
    }
}

pub fn print_prediction(result: &PredictionResult) {
    let color = match result {
        PredictionResult::HigherRisk => Color::Red,
        PredictionResult::LowerRisk => Color::Green,
        PredictionResult::Unavailable => Color::Yellow,
    };

    let mut table = new_table();
    table.set_header(vec![Cell::new("Prediction Result").add_attribute(Attribute::Bold)]);
    table.add_row(vec![Cell::new(result.message()).fg(color)]);
    table.add_row(vec![Cell::new(DISCLAIMER).fg(Color::DarkGrey)]);
    println!("{}", table);
}
