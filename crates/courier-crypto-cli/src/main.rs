//! courier-crypto CLI: the `courier-crypto` command.
//!
//! Command-line access to the primitive layer: key pairs, X25519 agreement,
//! XEdDSA signatures, the three-chunk HKDF, SHA-512, HMAC-SHA-256 and
//! AES-CBC.
//!
//! Encodings: private keys, signatures and ciphertexts are base64; public
//! keys are base64 of the 33-byte `0x05`-prefixed form; symmetric keys, IVs,
//! HKDF inputs and digests are hex; messages are UTF-8 text.

use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use log::debug;
use zeroize::Zeroizing;

use courier_crypto::convert::{from_base64, from_hex, to_base64, to_hex};
use courier_crypto::{
    AesKey, Crypto, CryptoConfig, Iv, MacKey, PrivateKey, PublicKey, Signature,
};

// ── CLI structure ─────────────────────────────────────────────────────────────

/// Cryptographic primitives for end-to-end messaging.
#[derive(Parser, Debug)]
#[command(
    name = "courier-crypto",
    about = "courier-crypto CLI",
    version,
    long_about = "courier-crypto: cryptographic primitives CLI\n\nGenerate Curve25519 key pairs, agree on shared secrets, sign and verify\nwith XEdDSA, derive keys with HKDF, and run AES-CBC / HMAC / SHA-512."
)]
struct Cli {
    /// JSON config file (see COURIER_CRYPTO_RNG_SEED for the env override)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a Curve25519 key pair
    Keygen {
        /// Expand this private key (base64) instead of generating one
        #[arg(long)]
        private: Option<String>,
    },

    /// Compute an X25519 shared secret
    Agree {
        /// Peer public key (base64)
        #[arg(long)]
        public: String,
        /// Own private key (base64)
        #[arg(long)]
        private: String,
    },

    /// Sign a message with XEdDSA
    Sign {
        /// Private key (base64)
        #[arg(long)]
        private: String,
        /// Message text
        #[arg(long)]
        message: String,
    },

    /// Verify an XEdDSA signature (exits non-zero when invalid)
    Verify {
        /// Public key (base64)
        #[arg(long)]
        public: String,
        /// Message text
        #[arg(long)]
        message: String,
        /// Signature (base64)
        #[arg(long)]
        signature: String,
    },

    /// Derive three 32-byte keys with HKDF-SHA-256
    Derive {
        /// Input key material (hex)
        #[arg(long)]
        input: String,
        /// Salt (hex)
        #[arg(long, default_value = "")]
        salt: String,
        /// Info string
        #[arg(long, default_value = "")]
        info: String,
    },

    /// SHA-512 digest of a message
    Hash {
        /// Message text
        #[arg(long)]
        data: String,
    },

    /// HMAC-SHA-256 of a message
    Hmac {
        /// MAC key (hex)
        #[arg(long)]
        key: String,
        /// Message text
        #[arg(long)]
        data: String,
    },

    /// AES-CBC encrypt a message
    Encrypt {
        /// AES key, 16/24/32 bytes (hex)
        #[arg(long)]
        key: String,
        /// IV, 16 bytes (hex); random when omitted
        #[arg(long)]
        iv: Option<String>,
        /// Plaintext
        #[arg(long)]
        data: String,
    },

    /// AES-CBC decrypt a ciphertext
    Decrypt {
        /// AES key, 16/24/32 bytes (hex)
        #[arg(long)]
        key: String,
        /// IV, 16 bytes (hex)
        #[arg(long)]
        iv: String,
        /// Ciphertext (base64)
        #[arg(long)]
        data: String,
    },
}

// ── Main entry point ──────────────────────────────────────────────────────────

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = run(cli).await {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let crypto = build_crypto(cli.config.as_deref())?;
    let out = Output { json: cli.json };

    match cli.command {
        Commands::Keygen { private } => cmd_keygen(&crypto, private.as_deref(), &out).await,
        Commands::Agree { public, private } => cmd_agree(&crypto, &public, &private, &out).await,
        Commands::Sign { private, message } => cmd_sign(&crypto, &private, &message, &out).await,
        Commands::Verify {
            public,
            message,
            signature,
        } => cmd_verify(&crypto, &public, &message, &signature, &out).await,
        Commands::Derive { input, salt, info } => {
            cmd_derive(&crypto, &input, &salt, &info, &out).await
        }
        Commands::Hash { data } => cmd_hash(&crypto, &data, &out).await,
        Commands::Hmac { key, data } => cmd_hmac(&crypto, &key, &data, &out).await,
        Commands::Encrypt { key, iv, data } => {
            cmd_encrypt(&crypto, &key, iv.as_deref(), &data, &out).await
        }
        Commands::Decrypt { key, iv, data } => cmd_decrypt(&crypto, &key, &iv, &data, &out).await,
    }
}

fn build_crypto(path: Option<&std::path::Path>) -> Result<Crypto> {
    let config = match path {
        Some(p) => CryptoConfig::load(p)
            .with_context(|| format!("failed to load config {}", p.display()))?,
        None => CryptoConfig::default(),
    };
    let config = config.with_env().context("invalid environment override")?;
    if config.rng_seed.is_some() {
        debug!("using deterministic random source");
    }
    Ok(Crypto::from_config(&config))
}

// ── Output ────────────────────────────────────────────────────────────────────

struct Output {
    json: bool,
}

impl Output {
    /// Print named string fields, either as `name: value` lines or as one
    /// JSON object.
    fn emit(&self, fields: &[(&str, String)]) -> Result<()> {
        if self.json {
            let map: serde_json::Map<String, serde_json::Value> = fields
                .iter()
                .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.clone())))
                .collect();
            println!("{}", serde_json::to_string_pretty(&map)?);
        } else {
            for (k, v) in fields {
                println!("{k}: {v}");
            }
        }
        Ok(())
    }
}

// ── Argument decoding ─────────────────────────────────────────────────────────

fn parse_private(b64: &str) -> Result<PrivateKey> {
    let bytes = Zeroizing::new(from_base64(b64).context("private key")?);
    PrivateKey::from_slice(&bytes).context("private key")
}

fn parse_public(b64: &str) -> Result<PublicKey> {
    let bytes = from_base64(b64).context("public key")?;
    PublicKey::from_slice(&bytes).context("public key")
}

fn parse_aes_key(hex: &str) -> Result<AesKey> {
    let bytes = Zeroizing::new(from_hex(hex).context("AES key")?);
    AesKey::from_slice(&bytes).context("AES key")
}

fn parse_iv(hex: &str) -> Result<Iv> {
    Iv::from_slice(&from_hex(hex).context("IV")?).context("IV")
}

// ── Command implementations ───────────────────────────────────────────────────

/// `courier-crypto keygen [--private B64]`
async fn cmd_keygen(crypto: &Crypto, private: Option<&str>, out: &Output) -> Result<()> {
    let private = private.map(parse_private).transpose()?;
    let pair = crypto.create_key_pair(private).await?;
    out.emit(&[
        ("public", to_base64(&pair.public.serialize())),
        ("private", to_base64(pair.private.as_bytes())),
    ])
}

/// `courier-crypto agree --public B64 --private B64`
async fn cmd_agree(crypto: &Crypto, public: &str, private: &str, out: &Output) -> Result<()> {
    let public = parse_public(public)?;
    let private = parse_private(private)?;
    let shared = crypto
        .ecdhe(&public, &private)
        .await
        .context("key agreement failed")?;
    out.emit(&[("shared", to_hex(shared.as_bytes()))])
}

/// `courier-crypto sign --private B64 --message TEXT`
async fn cmd_sign(crypto: &Crypto, private: &str, message: &str, out: &Output) -> Result<()> {
    let private = parse_private(private)?;
    let signature = crypto.ed25519_sign(&private, message.as_bytes()).await?;
    out.emit(&[("signature", to_base64(signature.as_bytes()))])
}

/// `courier-crypto verify --public B64 --message TEXT --signature B64`
async fn cmd_verify(
    crypto: &Crypto,
    public: &str,
    message: &str,
    signature: &str,
    out: &Output,
) -> Result<()> {
    let public = parse_public(public)?;
    let signature =
        Signature::from_slice(&from_base64(signature).context("signature")?).context("signature")?;
    let valid = crypto
        .ed25519_verify(&public, message.as_bytes(), &signature)
        .await?;
    out.emit(&[("valid", valid.to_string())])?;
    if !valid {
        bail!("signature is invalid");
    }
    Ok(())
}

/// `courier-crypto derive --input HEX [--salt HEX] [--info TEXT]`
async fn cmd_derive(
    crypto: &Crypto,
    input: &str,
    salt: &str,
    info: &str,
    out: &Output,
) -> Result<()> {
    let input = Zeroizing::new(from_hex(input).context("input")?);
    let salt = from_hex(salt).context("salt")?;
    let keys = crypto.hkdf(&input, &salt, info.as_bytes()).await?;
    out.emit(&[
        ("t1", to_hex(keys.t1())),
        ("t2", to_hex(keys.t2())),
        ("t3", to_hex(keys.t3())),
    ])
}

/// `courier-crypto hash --data TEXT`
async fn cmd_hash(crypto: &Crypto, data: &str, out: &Output) -> Result<()> {
    let digest = crypto.hash(data.as_bytes()).await?;
    out.emit(&[("sha512", to_hex(&digest))])
}

/// `courier-crypto hmac --key HEX --data TEXT`
async fn cmd_hmac(crypto: &Crypto, key: &str, data: &str, out: &Output) -> Result<()> {
    let key = MacKey::new(&Zeroizing::new(from_hex(key).context("MAC key")?));
    let mac = crypto.sign(&key, data.as_bytes()).await?;
    out.emit(&[("hmac", to_hex(&mac))])
}

/// `courier-crypto encrypt --key HEX [--iv HEX] --data TEXT`
async fn cmd_encrypt(
    crypto: &Crypto,
    key: &str,
    iv: Option<&str>,
    data: &str,
    out: &Output,
) -> Result<()> {
    let key = parse_aes_key(key)?;
    let iv = match iv {
        Some(hex) => parse_iv(hex)?,
        None => crypto.random_iv().await?,
    };
    let ciphertext = crypto.encrypt(&key, data.as_bytes(), &iv).await?;
    out.emit(&[
        ("iv", to_hex(iv.as_bytes())),
        ("ciphertext", to_base64(&ciphertext)),
    ])
}

/// `courier-crypto decrypt --key HEX --iv HEX --data B64`
async fn cmd_decrypt(
    crypto: &Crypto,
    key: &str,
    iv: &str,
    data: &str,
    out: &Output,
) -> Result<()> {
    let key = parse_aes_key(key)?;
    let iv = parse_iv(iv)?;
    let ciphertext = from_base64(data).context("ciphertext")?;
    let plaintext = crypto
        .decrypt(&key, &ciphertext, &iv)
        .await
        .map_err(|e| anyhow!("decryption failed: {e}"))?;
    match std::str::from_utf8(&plaintext) {
        Ok(text) => out.emit(&[("plaintext", text.to_string())]),
        Err(_) => out.emit(&[("plaintext_base64", to_base64(&plaintext))]),
    }
}
