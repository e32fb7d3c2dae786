//! Command line arguments and one-shot subcommands.
//!
//! Each subcommand performs exactly one provider operation and writes its result
//! to the given writer, normally stdout.

use std::io::Write;
use std::net::Ipv4Addr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{ArgAction, Parser, Subcommand};
use steamer_provider::{CreateRecordRequest, DnsProvider};

use crate::view::format;

#[derive(Parser, Debug)]
#[command(name = "steamer", version)]
#[command(about = "Manage Porkbun domains and DNS records from the terminal")]
pub struct Cli {
    /// Config file to read instead of the default locations.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v: info, -vv: debug). STEAMER_LOG overrides.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List the domains in the account.
    ListDomains,

    /// List the DNS records of a domain.
    ListRecords {
        /// Domain name, e.g. example.com.
        domain: String,
    },

    /// Create an A record.
    AddA {
        /// Domain name, e.g. example.com.
        domain: String,
        /// Subdomain, e.g. www. Use "" for the apex.
        subdomain: String,
        /// IPv4 address the record points to.
        ip: Ipv4Addr,
        /// TTL in seconds. Defaults to the registrar's minimum.
        #[arg(long)]
        ttl: Option<u32>,
    },

    /// Delete a DNS record by ID.
    Rm {
        /// Domain name, e.g. example.com.
        domain: String,
        /// Record ID as shown by list-records.
        record_id: String,
    },

    /// Browse domains and records interactively.
    Tui {
        /// Open this domain's records directly.
        #[arg(short, long)]
        domain: Option<String>,
    },
}

/// Run a one-shot subcommand.
///
/// `Tui` is handled by the caller and ignored here.
pub async fn execute(
    command: Command,
    provider: &dyn DnsProvider,
    out: &mut impl Write,
    today: NaiveDate,
) -> Result<()> {
    match command {
        Command::ListDomains => list_domains(provider, out, today).await,
        Command::ListRecords { domain } => list_records(provider, out, &domain).await,
        Command::AddA {
            domain,
            subdomain,
            ip,
            ttl,
        } => add_a(provider, out, &domain, &subdomain, ip, ttl).await,
        Command::Rm { domain, record_id } => remove(provider, out, &domain, &record_id).await,
        Command::Tui { .. } => Ok(()),
    }
}

async fn list_domains(
    provider: &dyn DnsProvider,
    out: &mut impl Write,
    today: NaiveDate,
) -> Result<()> {
    let domains = provider
        .list_domains()
        .await
        .context("failed to retrieve domains")?;

    if domains.is_empty() {
        writeln!(out, "No domains found.")?;
        return Ok(());
    }

    writeln!(out, "Domains:")?;
    for domain in &domains {
        let mut parts = vec![format!("- {}", domain.name)];
        parts.extend(format::expiry_text(domain, today));
        let labels = format::labels_text(domain);
        if !labels.is_empty() {
            parts.push(labels);
        }
        writeln!(out, "{}", parts.join("  "))?;
    }
    Ok(())
}

async fn list_records(provider: &dyn DnsProvider, out: &mut impl Write, domain: &str) -> Result<()> {
    let records = provider
        .list_records(domain)
        .await
        .with_context(|| format!("failed to retrieve records for {domain}"))?;

    if records.is_empty() {
        writeln!(out, "No DNS records found for {domain}.")?;
        return Ok(());
    }

    writeln!(out, "DNS Records for {domain}:")?;
    writeln!(out, "{:<10} {:<25} {:<10} {:<30}", "ID", "NAME", "TYPE", "CONTENT")?;
    for record in &records {
        writeln!(
            out,
            "{:<10} {:<25} {:<10} {:<30}",
            record.id, record.name, record.record_type, record.content
        )?;
    }
    Ok(())
}

async fn add_a(
    provider: &dyn DnsProvider,
    out: &mut impl Write,
    domain: &str,
    subdomain: &str,
    ip: Ipv4Addr,
    ttl: Option<u32>,
) -> Result<()> {
    let mut request = CreateRecordRequest::a_record(subdomain, ip);
    if let Some(ttl) = ttl {
        request = request.with_ttl(ttl.to_string());
    }

    let id = provider
        .create_record(domain, &request)
        .await
        .context("failed to create A record")?;

    tracing::info!(domain, subdomain, %ip, id = %id, "A record created");
    writeln!(
        out,
        "Successfully created A record for {} pointing to {ip} (ID: {id})",
        fqdn(subdomain, domain)
    )?;
    Ok(())
}

async fn remove(
    provider: &dyn DnsProvider,
    out: &mut impl Write,
    domain: &str,
    record_id: &str,
) -> Result<()> {
    provider
        .delete_record(domain, record_id)
        .await
        .context("failed to delete record")?;

    tracing::info!(domain, record_id, "record deleted");
    writeln!(out, "Successfully deleted record {record_id} from {domain}")?;
    Ok(())
}

/// `www` + `example.com` → `www.example.com`. An empty subdomain is the apex.
fn fqdn(subdomain: &str, domain: &str) -> String {
    if subdomain.is_empty() {
        domain.to_string()
    } else {
        format!("{subdomain}.{domain}")
    }
}
