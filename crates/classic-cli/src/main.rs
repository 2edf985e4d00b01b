//! Command-line interface for the classical cipher workspace.

#![forbid(unsafe_code)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use classic_ciphers::{
    decrypt, open, random_key, Alphabet, CipherKind, ColumnarOrder, Envelope, KeyMatrix,
    Keys,
};
use classic_core::{normalize_text, prepare_digraphs};
use rand::{CryptoRng, Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Classical cipher CLI.
#[derive(Parser)]
#[command(
    name = "classic",
    version,
    author,
    about = "Playfair, ADFGX and ADFGVX ciphers"
)]
struct Cli {
    /// Print intermediate steps to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Family {
    Playfair,
    Adfgx,
    Adfgvx,
}

impl From<Family> for CipherKind {
    fn from(value: Family) -> Self {
        match value {
            Family::Playfair => CipherKind::Playfair,
            Family::Adfgx => CipherKind::Adfgx,
            Family::Adfgvx => CipherKind::Adfgvx,
        }
    }
}

#[derive(Args)]
struct KeyArgs {
    /// Key for the symbol square.
    #[arg(long, short = 'k', value_name = "KEY")]
    key: String,
    /// Transposition key (ADFGX / ADFGVX only).
    #[arg(long, short = 't', value_name = "KEY")]
    transposition: Option<String>,
}

#[derive(Args)]
struct InputArgs {
    /// Text given inline.
    #[arg(long, value_name = "TEXT", conflicts_with = "input")]
    text: Option<String>,
    /// Read the text from a file.
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt text and print the ciphertext.
    Encrypt {
        /// Cipher family.
        #[arg(long, short = 'c', value_enum)]
        cipher: Family,
        #[command(flatten)]
        keys: KeyArgs,
        #[command(flatten)]
        input: InputArgs,
        /// Also write an envelope (ciphertext + filler log) for exact decryption.
        #[arg(long, value_name = "FILE")]
        envelope: Option<PathBuf>,
        /// Group output into blocks of this many characters.
        #[arg(long, value_name = "N")]
        group: Option<usize>,
    },
    /// Decrypt ciphertext.
    ///
    /// With an envelope the original normalized text is restored; without one
    /// the raw symbol stream is printed, fillers and escape tokens included.
    Decrypt {
        /// Cipher family.
        #[arg(long, short = 'c', value_enum)]
        cipher: Family,
        #[command(flatten)]
        keys: KeyArgs,
        #[command(flatten)]
        input: InputArgs,
        /// Envelope written by `encrypt --envelope`.
        #[arg(long, value_name = "FILE")]
        envelope: Option<PathBuf>,
    },
    /// Print the key square.
    Matrix {
        /// Cipher family.
        #[arg(long, short = 'c', value_enum)]
        cipher: Family,
        /// Key for the symbol square.
        #[arg(long, short = 'k', value_name = "KEY", default_value = "")]
        key: String,
    },
    /// Print the normalized form of some text.
    Normalize {
        /// Cipher family.
        #[arg(long, short = 'c', value_enum)]
        cipher: Family,
        #[command(flatten)]
        input: InputArgs,
    },
    /// Print the column read order for a transposition key.
    Order {
        /// Transposition key.
        #[arg(long, short = 't', value_name = "KEY")]
        transposition: String,
    },
    /// Generate a random square key.
    Keygen {
        /// Cipher family.
        #[arg(long, short = 'c', value_enum)]
        cipher: Family,
        /// Key length (defaults to the full alphabet).
        #[arg(long)]
        length: Option<usize>,
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run a local demo: random keys and message through every family.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    match cli.command {
        Commands::Encrypt {
            cipher,
            keys,
            input,
            envelope,
            group,
        } => cmd_encrypt(cipher.into(), &keys, &input, envelope.as_deref(), group, verbose),
        Commands::Decrypt {
            cipher,
            keys,
            input,
            envelope,
        } => cmd_decrypt(cipher.into(), &keys, &input, envelope.as_deref(), verbose),
        Commands::Matrix { cipher, key } => cmd_matrix(cipher.into(), &key),
        Commands::Normalize { cipher, input } => cmd_normalize(cipher.into(), &input),
        Commands::Order { transposition } => cmd_order(&transposition),
        Commands::Keygen {
            cipher,
            length,
            seed,
        } => cmd_keygen(cipher.into(), length, seed),
        Commands::Demo { seed } => cmd_demo(seed, verbose),
    }
}

fn cmd_encrypt(
    kind: CipherKind,
    key_args: &KeyArgs,
    input: &InputArgs,
    envelope_path: Option<&Path>,
    group: Option<usize>,
    verbose: bool,
) -> Result<()> {
    let config = kind.config();
    let keys = resolve_keys(kind, key_args)?;
    let text = read_input(input)?;
    if verbose {
        eprintln!(
            "normalized: {}",
            normalize_text(&text, &config.alphabet, config.escapes)
        );
        eprintln!("matrix:\n{}", KeyMatrix::build(keys.square, &config.alphabet));
        if kind.is_fractionating() {
            eprintln!("order: {:?}", ColumnarOrder::build(keys.transposition).as_slice());
        }
    }

    let envelope = Envelope::seal(kind, &text, &keys).context("encrypt")?;
    if verbose {
        eprintln!("fillers: {:?}", envelope.fillers.positions());
    }
    if let Some(path) = envelope_path {
        let bytes = envelope.to_bytes().context("serialize envelope")?;
        fs::write(path, bytes).with_context(|| format!("write {}", path.display()))?;
    }
    println!("{}", present(&envelope.ciphertext, group));
    Ok(())
}

fn cmd_decrypt(
    kind: CipherKind,
    key_args: &KeyArgs,
    input: &InputArgs,
    envelope_path: Option<&Path>,
    verbose: bool,
) -> Result<()> {
    let config = kind.config();
    let keys = resolve_keys(kind, key_args)?;

    let plaintext = match envelope_path {
        Some(path) => {
            let envelope = load_envelope(path)?;
            if envelope.kind != kind {
                bail!(
                    "envelope was sealed with {}, not {}",
                    envelope.kind.name(),
                    kind.name()
                );
            }
            if verbose {
                eprintln!("fillers: {:?}", envelope.fillers.positions());
            }
            open(&envelope.ciphertext, &envelope.fillers, &keys, &config).context("decrypt")?
        }
        None => {
            let ciphertext = read_input(input)?;
            if verbose {
                eprintln!("no envelope: output keeps fillers and escape tokens");
            }
            decrypt(&ciphertext, &keys, &config).context("decrypt")?
        }
    };
    println!("{}", plaintext.to_uppercase());
    Ok(())
}

fn cmd_matrix(kind: CipherKind, key: &str) -> Result<()> {
    let config = kind.config();
    println!("{}", KeyMatrix::build(key, &config.alphabet));
    Ok(())
}

fn cmd_normalize(kind: CipherKind, input: &InputArgs) -> Result<()> {
    let config = kind.config();
    let text = read_input(input)?;
    let normalized = normalize_text(&text, &config.alphabet, config.escapes);
    match kind {
        CipherKind::Playfair => {
            let prepared = prepare_digraphs(&normalized, config.filler);
            println!("{}", present(&prepared.text(), Some(2)));
        }
        CipherKind::Adfgx | CipherKind::Adfgvx => println!("{}", present(&normalized, None)),
    }
    Ok(())
}

fn cmd_order(transposition: &str) -> Result<()> {
    let order = ColumnarOrder::build(transposition);
    if order.is_empty() {
        bail!("transposition key has no letters");
    }
    let rendered: Vec<String> = order.as_slice().iter().map(usize::to_string).collect();
    println!("{}", rendered.join(" "));
    Ok(())
}

fn cmd_keygen(kind: CipherKind, length: Option<usize>, seed: Option<u64>) -> Result<()> {
    let alphabet = kind.config().alphabet;
    let length = length.unwrap_or(alphabet.len());
    if length == 0 || length > alphabet.len() {
        bail!("key length must be between 1 and {}", alphabet.len());
    }
    let mut rng = seeded_rng(seed);
    println!("{}", random_key(&alphabet, length, &mut rng));
    Ok(())
}

fn cmd_demo(seed: Option<u64>, verbose: bool) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let words = [
        "attack", "at", "dawn", "the", "gold", "is", "under", "tree", "stump", "meet", "me",
        "noon", "room", "1200",
    ];
    let message: Vec<&str> = (0..8).map(|_| words[rng.gen_range(0..words.len())]).collect();
    let message = message.join(" ");
    println!("message: {}", message);

    for kind in CipherKind::ALL {
        let config = kind.config();
        let square = random_key(&config.alphabet, config.alphabet.len(), &mut rng);
        let transposition = random_key(&Alphabet::latin25(), 6, &mut rng);
        let keys = Keys::new(&square, &transposition);

        let envelope = Envelope::seal(kind, &message, &keys).context("seal")?;
        let opened = envelope.open(&keys).context("open")?;
        if verbose {
            eprintln!("{} square key: {}", kind.name(), square);
            if kind.is_fractionating() {
                eprintln!("{} transposition key: {}", kind.name(), transposition);
            }
        }
        println!("{:>8}: {}", kind.name(), present(&envelope.ciphertext, Some(5)));
        let expected = match kind {
            CipherKind::Playfair => message.clone(),
            CipherKind::Adfgx | CipherKind::Adfgvx => {
                normalize_text(&message, &config.alphabet, config.escapes)
            }
        };
        if opened != expected {
            bail!("demo roundtrip failed for {}", kind.name());
        }
    }
    Ok(())
}

fn resolve_keys(kind: CipherKind, args: &KeyArgs) -> Result<Keys<'_>> {
    match (kind.is_fractionating(), args.transposition.as_deref()) {
        (true, Some(transposition)) => Ok(Keys::new(&args.key, transposition)),
        (true, None) => bail!("{} needs --transposition", kind.name()),
        (false, _) => Ok(Keys::square(&args.key)),
    }
}

fn read_input(input: &InputArgs) -> Result<String> {
    match (&input.text, &input.input) {
        (Some(text), _) => Ok(text.clone()),
        (None, Some(path)) => {
            fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
        }
        (None, None) => bail!("provide --text or --input"),
    }
}

fn load_envelope(path: &Path) -> Result<Envelope> {
    let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    Envelope::from_bytes(&bytes).context("deserialize envelope")
}

/// Upper-cases `text` and splits it into blocks of `group` characters.
fn present(text: &str, group: Option<usize>) -> String {
    let upper = text.to_uppercase();
    match group {
        Some(width) if width > 0 => upper
            .chars()
            .collect::<Vec<_>>()
            .chunks(width)
            .map(|chunk| chunk.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join(" "),
        _ => upper,
    }
}

fn seeded_rng(seed: Option<u64>) -> impl RngCore + CryptoRng {
    match seed {
        Some(value) => {
            let mut seed_bytes = [0u8; 32];
            seed_bytes[..8].copy_from_slice(&value.to_le_bytes());
            ChaCha20Rng::from_seed(seed_bytes)
        }
        None => {
            let mut seed_bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut seed_bytes);
            ChaCha20Rng::from_seed(seed_bytes)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_groups_and_upper_cases() {
        assert_eq!(present("abcdefg", Some(2)), "AB CD EF G");
        assert_eq!(present("abcdefg", Some(5)), "ABCDE FG");
        assert_eq!(present("abc", None), "ABC");
        assert_eq!(present("abc", Some(0)), "ABC");
        assert_eq!(present("", Some(2)), "");
    }

    #[test]
    fn fractionating_requires_transposition_key() {
        let args = KeyArgs {
            key: "nzu".into(),
            transposition: None,
        };
        assert!(resolve_keys(CipherKind::Adfgvx, &args).is_err());
        let keys = resolve_keys(CipherKind::Playfair, &args).unwrap();
        assert_eq!(keys.square, "nzu");
    }

    #[test]
    fn demo_round_trips_with_seed() {
        cmd_demo(Some(42), false).unwrap();
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
