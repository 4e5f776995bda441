use serde_json::{json, Value};

use crate::cli::OutputFormat;

/// Output a success message in the appropriate format.
///
/// In text mode `text` is printed verbatim when given, so values can be
/// piped into other commands.
pub fn output_success(
    output_format: OutputFormat,
    message: &str,
    data: Value,
    text: Option<&str>,
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let response = json!({
                "success": true,
                "message": message,
                "data": data
            });
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => match text {
            Some(text) => println!("{}", text),
            None => {
                eprintln!("✓ {}", message);
                println!("{}", serde_json::to_string_pretty(&data)?);
            }
        },
    }
    Ok(())
}
