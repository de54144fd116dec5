use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use hsjwt::{Algorithm, Authority, Claims, ClaimsValidation};
use serde_json::{Value, json};
use std::fmt;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use zeroize::Zeroizing;

#[derive(Parser)]
#[command(
    name = "hsjwt",
    version,
    about = "Issue and verify HMAC-signed bearer tokens"
)]
struct Cli {
    /// Shared secret used to sign and verify tokens
    #[arg(long, env = "HSJWT_SECRET", hide_env_values = true, global = true)]
    secret: Option<String>,

    /// Signing algorithm (HS256, HS384 or HS512)
    #[arg(
        long,
        env = "HSJWT_ALGORITHM",
        default_value = "HS256",
        value_parser = parse_algorithm,
        global = true
    )]
    algorithm: Algorithm,

    /// Log debug output to stderr
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Issue a token carrying a JSON payload
    Issue {
        /// Payload as JSON text, e.g. '{"role":"api_user"}'
        payload: String,

        /// Set `iat` to now and `exp` this many seconds later
        #[arg(long)]
        expires_in: Option<u64>,

        /// Subject (`sub`) claim
        #[arg(long)]
        subject: Option<String>,

        /// Issuer (`iss`) claim
        #[arg(long)]
        issuer: Option<String>,

        /// Audience (`aud`) claim
        #[arg(long)]
        audience: Option<String>,
    },

    /// Verify a token and print its header, payload and verdict
    Verify {
        token: String,

        /// Also check `exp`, `nbf` and `iat` once the signature matches
        #[arg(long, default_value_t = false)]
        validate_claims: bool,
    },

    /// Base64URL-encode text
    Encode { text: String },

    /// Decode Base64URL text
    Decode { text: String },
}

impl fmt::Debug for Cli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cli")
            .field("secret", &self.secret.as_ref().map(|_| "<redacted>"))
            .field("algorithm", &self.algorithm)
            .field("verbose", &self.verbose)
            .field("quiet", &self.quiet)
            .field("cmd", &self.cmd)
            .finish()
    }
}

fn parse_algorithm(value: &str) -> Result<Algorithm, String> {
    Algorithm::from_str(value).map_err(|e| e.to_string())
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(&cli);

    match cli.cmd {
        Command::Issue {
            payload,
            expires_in,
            subject,
            issuer,
            audience,
        } => {
            let authority = authority(cli.secret, cli.algorithm)?;
            let payload: Value =
                serde_json::from_str(&payload).context("payload is not valid JSON")?;
            let payload = with_registered_claims(payload, expires_in, subject, issuer, audience)?;

            let token = authority.issue(&payload).context("failed to issue token")?;
            println!("{token}");
            Ok(ExitCode::SUCCESS)
        }

        Command::Verify {
            token,
            validate_claims,
        } => {
            let authority = authority(cli.secret, cli.algorithm)?;
            let valid = run_verify(&authority, &token, validate_claims)?;
            Ok(if valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }

        Command::Encode { text } => {
            println!("{}", hsjwt::encode(text));
            Ok(ExitCode::SUCCESS)
        }

        Command::Decode { text } => {
            let bytes = hsjwt::decode(&text).context("input is not Base64URL")?;
            println!("{}", String::from_utf8_lossy(&bytes));
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn init_tracing(cli: &Cli) {
    let level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn authority(secret: Option<String>, algorithm: Algorithm) -> anyhow::Result<Authority> {
    let Some(secret) = secret.map(Zeroizing::new) else {
        bail!("no secret given (use --secret or set HSJWT_SECRET)");
    };
    tracing::debug!(%algorithm, "loaded signing configuration");

    let authority = Authority::new(secret.as_bytes()).context("invalid secret")?;
    Ok(authority.with_algorithm(algorithm))
}

fn with_registered_claims(
    mut payload: Value,
    expires_in: Option<u64>,
    subject: Option<String>,
    issuer: Option<String>,
    audience: Option<String>,
) -> anyhow::Result<Value> {
    if expires_in.is_none() && subject.is_none() && issuer.is_none() && audience.is_none() {
        return Ok(payload);
    }

    let Some(object) = payload.as_object_mut() else {
        bail!("registered claims can only be added to a JSON object payload");
    };

    let mut claims = Claims::new();
    if let Some(seconds) = expires_in {
        claims = claims.expires_in(seconds);
    }
    claims.subject = subject;
    claims.issuer = issuer;
    claims.audience = audience;

    if let Value::Object(registered) = serde_json::to_value(&claims)? {
        object.extend(registered);
    }
    Ok(payload)
}

/// Print the verification report and return the verdict
fn run_verify(authority: &Authority, token: &str, validate_claims: bool) -> anyhow::Result<bool> {
    let verification = authority.verify(token).context("failed to verify token")?;
    let mut valid = verification.is_valid();

    if valid && validate_claims {
        let claims: Claims = serde_json::from_value(verification.payload().clone())
            .context("payload does not carry registered claims")?;
        if let Err(e) = ClaimsValidation::default().validate(&claims) {
            tracing::warn!(error = %e, "claims validation failed");
            valid = false;
        }
    }

    let (header, payload, _) = verification.into_parts();
    let report = json!({
        "header": header,
        "payload": payload,
        "valid": valid,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(valid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_issue() {
        let cli = Cli::try_parse_from([
            "hsjwt",
            "--secret",
            "s3cr3t",
            "--algorithm",
            "HS384",
            "issue",
            r#"{"role":"api_user"}"#,
            "--expires-in",
            "60",
        ])
        .unwrap();

        assert_eq!(cli.secret.as_deref(), Some("s3cr3t"));
        assert_eq!(cli.algorithm, Algorithm::HS384);
        assert!(matches!(
            cli.cmd,
            Command::Issue {
                expires_in: Some(60),
                ..
            }
        ));
    }

    #[test]
    fn test_parse_rejects_unknown_algorithm() {
        let result = Cli::try_parse_from(["hsjwt", "--algorithm", "none", "encode", "x"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_verify_flags() {
        let cli =
            Cli::try_parse_from(["hsjwt", "verify", "a.b.c", "--validate-claims", "-v"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(
            cli.cmd,
            Command::Verify {
                validate_claims: true,
                ..
            }
        ));
        assert!(Cli::try_parse_from(["hsjwt", "-v", "-q", "encode", "x"]).is_err());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let cli = Cli::try_parse_from(["hsjwt", "--secret", "s3cr3t", "encode", "x"]).unwrap();
        let debug = format!("{cli:?}");
        assert!(!debug.contains("s3cr3t"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_authority_requires_secret() {
        assert!(authority(None, Algorithm::HS256).is_err());
        assert!(authority(Some(String::new()), Algorithm::HS256).is_err());
        assert!(authority(Some("k".into()), Algorithm::HS512).is_ok());
    }

    #[test]
    fn test_registered_claims_merge() {
        let payload = with_registered_claims(
            json!({"role": "api_user"}),
            Some(60),
            Some("user-42".into()),
            None,
            Some("api".into()),
        )
        .unwrap();

        assert_eq!(payload["role"], "api_user");
        assert_eq!(payload["sub"], "user-42");
        assert_eq!(payload["aud"], "api");
        assert_eq!(
            payload["exp"].as_i64().unwrap() - payload["iat"].as_i64().unwrap(),
            60
        );
        assert!(payload.get("iss").is_none());

        assert!(with_registered_claims(json!([1]), None, Some("x".into()), None, None).is_err());
        assert_eq!(
            with_registered_claims(json!([1]), None, None, None, None).unwrap(),
            json!([1])
        );
    }

    #[test]
    fn test_verify_verdict() {
        let issuer = authority(Some("s3cr3t".into()), Algorithm::HS256).unwrap();
        let token = issuer.issue(&json!({"role": "api_user"})).unwrap();

        assert!(run_verify(&issuer, token.as_str(), false).unwrap());

        let other = authority(Some("wrong-secret".into()), Algorithm::HS256).unwrap();
        assert!(!run_verify(&other, token.as_str(), false).unwrap());

        assert!(run_verify(&issuer, "a.b", false).is_err());
    }

    #[test]
    fn test_verify_validates_claims_on_request() {
        let issuer = authority(Some("s3cr3t".into()), Algorithm::HS256).unwrap();
        let token = issuer.issue(&json!({"exp": 1000})).unwrap();

        assert!(run_verify(&issuer, token.as_str(), false).unwrap());
        assert!(!run_verify(&issuer, token.as_str(), true).unwrap());
    }
}
