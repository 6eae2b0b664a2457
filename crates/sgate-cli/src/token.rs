//! # Token Subcommand
//!
//! Encodes a credential token offline from explicit identifiers, without a
//! running server. Useful for staff tooling checks against a stored value.

use anyhow::Context;
use clap::Args;
use uuid::Uuid;

use sgate_core::{HardwareId, InstitutionId, StudentId};
use sgate_credential::CredentialPayload;

/// Arguments for the token subcommand.
#[derive(Args, Debug)]
pub struct TokenArgs {
    /// Institution identifier (UUID).
    #[arg(long)]
    pub institution: String,

    /// Student identifier (UUID).
    #[arg(long)]
    pub student: String,

    /// Hardware device identifier.
    #[arg(long)]
    pub hardware: Option<String>,
}

/// Encode and print the token.
pub fn run(args: TokenArgs) -> anyhow::Result<()> {
    let payload = payload_from_args(&args)?;
    let token = sgate_credential::encode(&payload)?;
    println!("{token}");
    Ok(())
}

fn payload_from_args(args: &TokenArgs) -> anyhow::Result<CredentialPayload> {
    let institution_id = InstitutionId(
        Uuid::parse_str(&args.institution).context("parsing --institution")?,
    );
    let student_id = StudentId(Uuid::parse_str(&args.student).context("parsing --student")?);
    Ok(CredentialPayload {
        institution_id,
        student_id,
        hardware_id: args.hardware.clone().map(HardwareId),
    })
}
