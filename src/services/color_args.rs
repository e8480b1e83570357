//! Turn a command-line color argument into a [`RawColor`].

use color_adjust::RawColor;

/// Parse a color argument.
///
/// Two or more numbers separated by commas and/or whitespace (optionally
/// wrapped in parentheses or brackets, as printed by this tool) become
/// numeric components; validation then insists on exactly three. Anything
/// else, including a single field like `123456`, is kept as text.
pub fn parse_color_arg(arg: &str) -> RawColor {
    let inner = arg
        .trim()
        .trim_start_matches(['(', '['])
        .trim_end_matches([')', ']']);

    let fields: Vec<&str> = inner
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|f| !f.is_empty())
        .collect();

    if fields.len() >= 2 {
        let numbers: Option<Vec<f64>> = fields.iter().map(|f| f.parse::<f64>().ok()).collect();
        if let Some(numbers) = numbers {
            return RawColor::Components(numbers);
        }
    }

    RawColor::Text(arg.to_string())
}
