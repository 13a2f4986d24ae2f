use clap::Subcommand;
use config_core::ConfigCore;
use config_core::service::error::ServiceError;
use serde::{Deserialize, Serialize};
use shared_types::{DomainId, TrustBundleId};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminConfig {
    pub database_url: String,
    pub trace_level: Option<String>,
    pub trace_json: Option<bool>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Apply pending database migrations
    Migrate,
    /// Associate a trust bundle with a domain
    Associate {
        #[arg(short, long)]
        domain: DomainId,
        #[arg(short = 'b', long)]
        trust_bundle: TrustBundleId,
    },
    /// Remove the association between a trust bundle and a domain
    Disassociate {
        #[arg(short, long)]
        domain: DomainId,
        #[arg(short = 'b', long)]
        trust_bundle: TrustBundleId,
    },
    /// List trust bundles associated with a domain
    ListBundles {
        #[arg(short, long)]
        domain: DomainId,
    },
    /// List domains associated with a trust bundle
    ListDomains {
        #[arg(short = 'b', long)]
        trust_bundle: TrustBundleId,
    },
}

/// Runs a command against an initialized core, returns the lines to print
pub async fn run_command(core: &ConfigCore, command: Command) -> anyhow::Result<Vec<String>> {
    let service = &core.trust_bundle_service;

    let output = match command {
        // migrations run when the data layer gets built
        Command::Migrate => vec!["Database schema up to date".to_owned()],
        Command::Associate {
            domain,
            trust_bundle,
        } => {
            let id = service
                .associate_trust_bundle_to_domain(domain, trust_bundle)
                .await
                .map_err(with_error_code)?;
            vec![format!(
                "Associated trust bundle {trust_bundle} with domain {domain} ({id})"
            )]
        }
        Command::Disassociate {
            domain,
            trust_bundle,
        } => {
            service
                .disassociate_trust_bundle_from_domain(domain, trust_bundle)
                .await
                .map_err(with_error_code)?;
            vec![format!(
                "Disassociated trust bundle {trust_bundle} from domain {domain}"
            )]
        }
        Command::ListBundles { domain } => service
            .get_trust_bundles_by_domain(domain)
            .await
            .map_err(with_error_code)?
            .into_iter()
            .map(|bundle| {
                format!(
                    "{}\t{}\t{}\t{}h",
                    bundle.trust_bundle_id,
                    bundle.bundle_name,
                    bundle.bundle_url,
                    bundle.refresh_interval
                )
            })
            .collect(),
        Command::ListDomains { trust_bundle } => service
            .get_domains_by_trust_bundle(trust_bundle)
            .await
            .map_err(with_error_code)?
            .into_iter()
            .map(|domain| format!("{}\t{}", domain.domain_id, domain.domain_name))
            .collect(),
    };

    Ok(output)
}

fn with_error_code(error: ServiceError) -> anyhow::Error {
    let code = error.error_code();
    let context = format!("{code:?}: {}", code.msg());

    anyhow::Error::new(error).context(context)
}
