use clap::Parser;

use contract_sentinel::{
    AuditResult, ContractAuditor, ExplorerClient, ThreatLevel, VerificationEngine, DEFAULT_CHAIN,
};

/// Smart contract security auditor backed by a chain-explorer API
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Contract address to audit
    #[arg(value_name = "CONTRACT_ADDRESS")]
    address: String,

    /// Blockchain network passed to the explorer as `chainid`
    #[arg(short, long, default_value = DEFAULT_CHAIN)]
    chain: String,

    /// Explorer API key for higher rate limits
    #[arg(long)]
    api_key: Option<String>,

    /// Show verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if args.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("contract_sentinel=debug")
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter("contract_sentinel=info")
            .init();
    }

    println!("\n🔍 Contract Sentinel");
    println!("====================\n");
    println!("🎯 Contract: {}", args.address);
    println!("🔗 Chain: {}\n", args.chain);

    let client = ExplorerClient::new(args.api_key);
    let auditor = ContractAuditor::new(VerificationEngine::new(client));

    let result = auditor.audit_contract(&args.address, &args.chain).await;
    println!("{}", result);

    let events = auditor.memory().query(None);
    if !events.is_empty() {
        println!("📋 Significant events recorded:");
        for event in &events {
            println!(
                "   [{}] {} - {}",
                event.timestamp,
                event.kind.as_str(),
                event.description
            );
        }
        println!();
    }

    // Exit code: 0 = no threat, 1 = threat detected, 2 = audit failed
    match result {
        AuditResult::Complete { threat_level, .. } => {
            if threat_level == ThreatLevel::None {
                std::process::exit(0);
            } else {
                std::process::exit(1);
            }
        }
        AuditResult::Failed { .. } => std::process::exit(2),
    }
}
