use clap::Parser;
use env_logger::Env;
use safetynet::verify::{VerifiedAttestation, Verifier, VerifierConfig};
use std::error::Error;
use std::fs;

#[derive(Parser, Debug)]
#[command(author, version, long_about = None,
    about = "Verify the signature and signing certificate of a SafetyNet \
    attestation statement and print its content")]
struct SafetyNetCli {
    /// The signed attestation statement (compact JWS)
    token: String,

    /// JSON verifier configuration
    #[arg(short, long)]
    config: Option<String>,

    /// Expected common name of the signing certificate
    #[arg(long)]
    hostname: Option<String>,
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .try_init()
        .ok();

    let args = SafetyNetCli::parse();

    match verify(&args) {
        Ok(va) => print_statement(&va),
        Err(e) => {
            println!("Failure: Failed to parse and verify the attestation statement.");
            println!("Failure detail: {e}");
        }
    }
}

fn verify(args: &SafetyNetCli) -> Result<VerifiedAttestation, Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => {
            log::debug!("loading verifier configuration from {path}");
            VerifierConfig::load_json(&fs::read_to_string(path)?)?
        }
        None => VerifierConfig::default(),
    };

    if let Some(h) = &args.hostname {
        config.required_hostname = h.clone();
    }

    log::debug!(
        "verifying against {} with {:?}",
        config.required_hostname,
        config.allowed_algorithms
    );

    let verifier = Verifier::new(config)?;

    let va = safetynet::parse_and_verify(args.token.trim(), &verifier)?;

    log::debug!("statement verified");

    Ok(va)
}

fn print_statement(va: &VerifiedAttestation) {
    println!("The content of the attestation statement is:");

    // Nonce that was submitted as part of this request.
    println!("Nonce: {}", String::from_utf8_lossy(&va.read_nonce()));
    println!("Timestamp: {} ms", va.timestamp_ms);

    // may be omitted if the service cannot reliably determine the package
    if va.has_package_info() {
        println!("APK package name: {}", va.apk_package_name);
        println!("APK digest SHA256: {}", va.apk_digest_sha256);
    }

    println!("CTS profile match: {}", flag(va.cts_profile_match));
    println!("Basic integrity match: {}", flag(va.basic_integrity));

    if !va.evaluation_type.is_empty() {
        println!("Evaluation type: {}", va.evaluation_type);
    }

    if let Some(advice) = &va.advice {
        println!("Advice: {advice}");
    }

    println!(
        "\n** This sample only shows how to verify the authenticity of an \
        attestation response. Next, you must check that the server response \
        matches the request by comparing the nonce, package name, timestamp \
        and digest."
    );
}

fn flag(v: bool) -> &'static str {
    if v {
        "TRUE"
    } else {
        "FALSE"
    }
}
