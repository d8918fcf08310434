use serde::Serialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use cwmp_netcore::config::{Command, Config};
use cwmp_netcore::cwmp::{ParamType, boolean, date};
use cwmp_netcore::{CoreResult, DefaultRoute, DefaultRouteResolver};

/// What `route` reports about the device's egress
#[derive(Debug, Serialize)]
struct RouteReport {
    hostname: String,
    default_route: DefaultRoute,
    reported_at: String,
}

fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    // Initialize logging; RUST_LOG directives win over the configured level
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(config.log_level).into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&config) {
        tracing::error!("{}", e);
        eprintln!("{}", e.user_message());
        std::process::exit(1);
    }
    Ok(())
}

fn run(config: &Config) -> CoreResult<()> {
    let resolver = DefaultRouteResolver::new(&config.route_table);

    match &config.command {
        Command::Route => {
            let report = RouteReport {
                hostname: get_hostname(),
                default_route: resolver.resolve()?,
                reported_at: date::format_utc(&chrono::Utc::now()),
            };
            if config.json {
                println!("{}", serde_json::to_string_pretty(&report).map_err(std::io::Error::from)?);
            } else {
                let gateway = report
                    .default_route
                    .gateway_address
                    .map_or_else(|| "none".to_string(), |gw| gw.to_string());
                println!(
                    "{} default via {} dev {} at {}",
                    report.hostname, gateway, report.default_route.interface_name, report.reported_at
                );
            }
        }
        Command::Interface => println!("{}", resolver.default_interface()?),
        Command::Gateway => match resolver.default_gateway()? {
            Some(gateway) => println!("{}", gateway),
            None => println!("none"),
        },
        Command::Bool { text } => println!("{}", boolean::format(boolean::parse(text)?)),
        Command::Date { text } => println!("{}", date::format_utc(&date::parse(text)?)),
        Command::Value { kind, text } => {
            let value = kind.parse::<ParamType>()?.coerce(text)?;
            let (xsd, wire) = value.soapify();
            if config.json {
                println!("{}", serde_json::json!({ "type": xsd, "value": wire }));
            } else {
                println!("{} {}", xsd, wire);
            }
        }
    }

    Ok(())
}

fn get_hostname() -> String {
    hostname::get()
        .ok()
        .and_then(|h| h.into_string().ok())
        .unwrap_or_else(|| "unknown".to_string())
}
