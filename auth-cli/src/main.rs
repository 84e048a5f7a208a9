use anyhow::{Context, Result};
use auth_core::AlgorithmId;
use auth_sim::FixedCellHost;
use clap::Parser;

mod args;

use crate::args::{Command, Opts, ValidateOpts, VectorOpts, VectorScheme};

fn main() -> Result<()> {
    env_logger::init();
    let opts = Opts::parse();
    match opts.cmd {
        Command::Validate(opts) => validate(opts),
        Command::Vector(opts) => vector(opts),
    }
}

fn parse_fixed<const N: usize>(label: &str, hex_str: &str) -> Result<[u8; N]> {
    let bytes = hex::decode(hex_str).with_context(|| format!("{label} is not valid hex"))?;
    bytes
        .try_into()
        .map_err(|bytes: Vec<u8>| anyhow::anyhow!("{label} must be {N} bytes, got {}", bytes.len()))
}

fn validate(opts: ValidateOpts) -> Result<()> {
    let alg = AlgorithmId::try_from(opts.alg)
        .map_err(|()| anyhow::anyhow!("unknown algorithm id {}", opts.alg))?;
    let signature = hex::decode(&opts.signature).context("signature is not valid hex")?;
    let message: [u8; 32] = parse_fixed("message", &opts.message)?;
    let fingerprint: [u8; 20] = parse_fixed("fingerprint", &opts.fingerprint)?;

    let lock_hashes = opts
        .lock_hash
        .iter()
        .map(|hex_str| parse_fixed::<32>("lock-hash", hex_str))
        .collect::<Result<Vec<_>>>()?;
    let host = FixedCellHost::new(lock_hashes);

    match auth_core::validate(alg, &signature, &message, &fingerprint, &host) {
        Ok(()) => {
            log::info!("validate({alg:?}) -> 0");
            println!("0");
        }
        Err(err) => {
            let code: i32 = err.into();
            log::warn!("validate({alg:?}) -> {code} ({err})");
            println!("{code}");
            std::process::exit(code);
        }
    }
    Ok(())
}

fn vector(opts: VectorOpts) -> Result<()> {
    let (sig, message, fingerprint) = match opts.scheme {
        VectorScheme::Ckb => auth_sim::vectors::ckb(),
        VectorScheme::Ethereum => auth_sim::vectors::ethereum(),
        VectorScheme::BitcoinCompressed => auth_sim::vectors::bitcoin_compressed(),
    };
    println!("signature   = {}", hex::encode(&sig));
    println!("message     = {}", hex::encode(message));
    println!("fingerprint = {}", hex::encode(fingerprint));
    Ok(())
}
