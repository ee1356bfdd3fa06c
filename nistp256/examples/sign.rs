//! Sign a message with a freshly generated key and write a report.
//!
//! ```text
//! cargo run --example sign -- "message to sign"
//! ```

use nistp256::{digest::hash_to_digest, ecdsa::SigningKey};
use std::{env, error::Error, fmt::Write as _, fs};

const DEFAULT_MESSAGE: &str = "Hello, P-256!";
const REPORT_PATH: &str = "results.txt";

fn main() -> Result<(), Box<dyn Error>> {
    let message = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_MESSAGE.to_owned());

    let e = hash_to_digest(message.as_bytes());

    let signing_key = SigningKey::generate()?;
    let verifying_key = signing_key.verifying_key();
    let signature = signing_key.sign_prehash(&e)?;
    let verification = verifying_key.verify_prehash_with_diagnostic(&e, &signature);

    let public_key = verifying_key.as_public_key();
    let secret_scalar = signing_key.as_secret_key().to_scalar();

    let mut report = String::new();
    writeln!(report, "Message: {message}")?;
    writeln!(report, "Message Hash: {e:#x}")?;
    writeln!(report, "Private key = {secret_scalar:#x}")?;
    writeln!(
        report,
        "Public key = ({:#x}, {:#x})",
        public_key.x(),
        public_key.y()
    )?;
    writeln!(report)?;
    writeln!(report, "r = {:#x}", signature.r())?;
    writeln!(report, "s = {:#x}", signature.s())?;
    match verification.v() {
        Some(v) => writeln!(report, "v = {v:#x}")?,
        None => writeln!(report, "v = none")?,
    }
    write!(report, "Verified: {}", verification.is_valid())?;

    fs::write(REPORT_PATH, &report)?;
    println!("{report}");
    println!("\nreport written to {REPORT_PATH}");

    Ok(())
}
