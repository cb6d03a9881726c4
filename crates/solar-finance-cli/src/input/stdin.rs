use serde::de::DeserializeOwned;
use std::io::{self, Read};

/// Read a typed JSON document from piped stdin. `None` when stdin is a TTY
/// or the pipe carries nothing but whitespace.
pub fn read_piped<T: DeserializeOwned>() -> Result<Option<T>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut raw = String::new();
    io::stdin().read_to_string(&mut raw)?;
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    let parsed =
        serde_json::from_str(raw).map_err(|e| format!("Failed to parse piped input: {}", e))?;
    Ok(Some(parsed))
}
