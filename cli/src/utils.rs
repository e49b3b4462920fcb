use std::{fs, path::Path};

use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use loan_market_shared::LoanFormInput;

use crate::cli::LoanArgs;

pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

/// Read a local image into an inline `data:` URL.
pub fn image_data_url(path: &Path) -> Result<String> {
    let bytes =
        fs::read(path).with_context(|| format!("failed to read image {}", path.display()))?;
    Ok(format!("data:{};base64,{}", mime_for_path(path), STANDARD.encode(bytes)))
}

/// Overlay the flags that were given onto `input`.
pub fn apply_loan_args(input: &mut LoanFormInput, args: &LoanArgs) -> Result<()> {
    let text_fields = [
        (&mut input.title, &args.title),
        (&mut input.category, &args.category),
        (&mut input.short_description, &args.short_description),
        (&mut input.description, &args.description),
        (&mut input.max_loan, &args.max_loan),
        (&mut input.interest_rate, &args.interest_rate),
        (&mut input.tenure, &args.tenure),
        (&mut input.emi_plans, &args.emi_plans),
    ];
    for (target, value) in text_fields {
        if let Some(value) = value {
            *target = value.clone();
        }
    }

    if let Some(url) = &args.image_url {
        input.image = url.trim().to_string();
    } else if let Some(path) = &args.image_file {
        input.image = image_data_url(path)?;
    }
    Ok(())
}
