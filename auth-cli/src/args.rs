use clap::{Parser, Subcommand};

#[derive(Parser)]
pub struct Opts {
    #[clap(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run one (alg, signature, message, pubkey_hash) tuple through the dispatcher.
    Validate(ValidateOpts),
    /// Print a ready-made (signature, message, fingerprint) vector for a scheme.
    Vector(VectorOpts),
}

#[derive(Parser)]
pub struct ValidateOpts {
    /// Numeric algorithm id (0=Ckb, 1=Ethereum, 2=Eos, 3=Tron, 4=Bitcoin,
    /// 5=Dogecoin, 6=CkbMultisig, 7=Litecoin, 8=Schnorr, 9=Cardano, 10=OwnerLock).
    #[clap(long)]
    pub alg: u8,
    /// Lowercase hex signature bytes.
    #[clap(long)]
    pub signature: String,
    /// Lowercase hex 32-byte message digest.
    #[clap(long)]
    pub message: String,
    /// Lowercase hex 20-byte claimed fingerprint.
    #[clap(long)]
    pub fingerprint: String,
    /// Lowercase hex lock-hashes the simulated OwnerLock host should report, in order.
    #[clap(long)]
    pub lock_hash: Vec<String>,
}

#[derive(Parser)]
pub struct VectorOpts {
    #[clap(subcommand)]
    pub scheme: VectorScheme,
}

#[derive(Subcommand)]
pub enum VectorScheme {
    Ckb,
    Ethereum,
    BitcoinCompressed,
}
