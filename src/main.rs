mod cli;

use anyhow::Context;
use clap::Parser;
use std::process::ExitCode;

use vegnbio_branding::head::{render_css_variables, render_head, HeadOptions};
use vegnbio_branding::manifest::{build_manifest, write_manifest, ManifestOptions};
use vegnbio_branding::persist::{load_descriptor, to_json_pretty};
use vegnbio_branding::settings::{load_settings, BuildSettings};
use vegnbio_branding::validate::{validate, ValidateOptions};
use vegnbio_branding::{BrandingDescriptor, BRANDING};

use cli::{Cli, Commands, DescriptorArgs};

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    // Logs go to stderr so JSON on stdout stays machine-readable.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp_millis()
        .init();
}

fn load_source(source: &DescriptorArgs) -> anyhow::Result<BrandingDescriptor> {
    match &source.descriptor {
        Some(path) => load_descriptor(path)
            .with_context(|| format!("Failed to load descriptor {}", path.display())),
        None => Ok(BRANDING.clone()),
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let settings = load_settings(cli.settings.as_deref());
    log::debug!(target: "branding", "Build settings: {:?}", settings);

    match cli.command {
        Commands::Show { source } => {
            let descriptor = load_source(&source)?;
            println!("{}", to_json_pretty(&descriptor)?);
        }
        Commands::Validate { source, assets } => {
            let descriptor = load_source(&source)?;
            let assets_dir = assets.as_deref().or(settings.assets_dir.as_deref());
            let report = validate(&descriptor, &ValidateOptions { assets_dir });

            print!("{}", report);
            if !report.is_ok() {
                return Ok(ExitCode::FAILURE);
            }
            println!(
                "{} {}: branding is valid",
                descriptor.app_name, descriptor.app_version
            );
        }
        Commands::Manifest {
            source,
            assets,
            out,
            stdout,
            icon_base,
            inline_icons,
            lang,
        } => {
            let descriptor = load_source(&source)?;
            let assets_dir = assets.as_deref().or(settings.assets_dir.as_deref());

            validate(&descriptor, &ValidateOptions { assets_dir })
                .into_result()
                .context("Refusing to generate a manifest from invalid branding")?;

            let options = ManifestOptions {
                assets_dir,
                icon_base: icon_base.as_deref().unwrap_or(&settings.icon_base),
                lang: lang.as_deref().unwrap_or(&settings.lang),
                inline_icons: inline_icons || settings.inline_icons,
            };
            let document = build_manifest(&descriptor, &options)?;

            if stdout {
                println!("{}", to_json_pretty(&document)?);
            } else {
                let path = out.unwrap_or_else(|| settings.manifest_path());
                write_manifest(&document, &path)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                println!("{}", path.display());
            }
        }
        Commands::Head {
            source,
            icon_base,
            favicon_base,
            css,
        } => {
            let descriptor = load_source(&source)?;
            print!("{}", head_output(&descriptor, &settings, icon_base, favicon_base, css));
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn head_output(
    descriptor: &BrandingDescriptor,
    settings: &BuildSettings,
    icon_base: Option<String>,
    favicon_base: Option<String>,
    css: bool,
) -> String {
    let options = HeadOptions {
        icon_base: icon_base.as_deref().unwrap_or(&settings.icon_base),
        favicon_base: favicon_base.as_deref().unwrap_or(&settings.favicon_base),
        ..HeadOptions::default()
    };
    let mut out = render_head(descriptor, &options);
    if css {
        out.push_str("<style>\n");
        out.push_str(&render_css_variables(&descriptor.colors));
        out.push_str("</style>\n");
    }
    out
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("[vegnbio-branding] {:#}", e);
            ExitCode::FAILURE
        }
    }
}
