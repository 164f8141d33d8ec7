use std::io::{self, Write};

use anyhow::{Context, Result};
use rpassword::read_password;
use serde::Serialize;

use passcraft::advisor::{ZxcvbnAuditor, audit_or_fallback};
use passcraft::strength::{self, StrengthResult};

use crate::CheckArgs;

#[derive(Debug, Serialize)]
struct CheckReport {
    #[serde(flatten)]
    strength: StrengthResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    audit: Option<String>,
}

fn read_password_from_stdin(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    io::stdout().flush().context("Failed to flush output")?;
    read_password().context("Failed to read password")
}

pub fn test_password(args: CheckArgs) -> Result<()> {
    let password = match args.password {
        Some(password) => password,
        None => read_password_from_stdin("Password to check: ")?,
    };

    let report = CheckReport {
        strength: strength::score(&password),
        audit: args
            .audit
            .then(|| audit_or_fallback(&ZxcvbnAuditor, &password)),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "Password strength: {} (score: {}/4)",
        report.strength.label, report.strength.score
    );
    if let Some(audit) = &report.audit {
        println!("Audit: {}", audit);
    }
    Ok(())
}
