/// One entry of a categorical select list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Choice {
    /// The raw code the form stores.
    pub code: &'static str,
    /// Numeric value of the code; the feature vector keeps its integer part.
    pub value: f64,
    pub label: &'static str,
}

const fn choice(code: &'static str, value: f64, label: &'static str) -> Choice {
    Choice { code, value, label }
}

pub const GENERAL_HEALTH: &[Choice] = &[
    choice("0", 0.0, "Poor"),
    choice("1", 1.0, "Fair"),
    choice("2", 2.0, "Good"),
    choice("3", 3.0, "Very Good"),
    choice("4", 4.0, "Excellent"),
];

// "5 or more years ago" is the only non-integer code.
pub const CHECKUP: &[Choice] = &[
    choice("4", 4.0, "Within the past year"),
    choice("2", 2.0, "Within the past 2 years"),
    choice("1", 1.0, "Within the past 5 years"),
    choice("0.2", 0.2, "5 or more years ago"),
    choice("0", 0.0, "Never"),
];

pub const AGE_CATEGORY: &[Choice] = &[
    choice("0", 0.0, "18-24"),
    choice("1", 1.0, "25-29"),
    choice("2", 2.0, "30-34"),
    choice("3", 3.0, "35-39"),
    choice("4", 4.0, "40-44"),
    choice("5", 5.0, "45-49"),
    choice("6", 6.0, "50-54"),
    choice("7", 7.0, "55-59"),
    choice("8", 8.0, "60-64"),
    choice("9", 9.0, "65-69"),
    choice("10", 10.0, "70-74"),
    choice("11", 11.0, "75-79"),
    choice("12", 12.0, "80+"),
];

/// Looks up the option whose code matches `raw` exactly (surrounding whitespace ignored).
pub fn find(options: &'static [Choice], raw: &str) -> Option<&'static Choice> {
    let raw = raw.trim();
    options.iter().find(|c| c.code == raw)
}
