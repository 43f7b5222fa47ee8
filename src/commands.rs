//! Top-level orchestration: cache maintenance, registry resolution,
//! per-application rendering.
use anyhow::{Context as _, Result};
use std::path::Path;

use crate::cli::Cli;
use crate::config::{ApplicationConfig, Config};
use crate::fetch::{Fetch, HttpFetcher};
use crate::logging::Logger;
use crate::registry::Registry;
use crate::render::Renderer;
use crate::scheme::{Colorscheme, SchemeEntry};
use crate::template::Template;

/// Run a full invocation against the real HTTP fetcher.
///
/// # Errors
///
/// Returns an error if configuration loading, registry resolution, or
/// scheme loading fails. Per-application render failures are reported and
/// do not abort the run.
pub fn run(args: &Cli, log: &Logger) -> Result<()> {
    let config_path = args.config.clone().unwrap_or_else(Config::default_path);
    let config = Config::load(&config_path)?;

    if args.print_config {
        println!("{}", config.to_toml()?);
    }

    if args.clear_list {
        clear_cache_files(&config, log);
    }
    if args.clear_schemes {
        clear_cache_dir(&config.schemes_cache_dir, "colorschemes", log);
    }
    if args.clear_templates {
        clear_cache_dir(&config.templates_cache_dir, "templates", log);
    }

    std::fs::create_dir_all(&config.schemes_cache_dir).with_context(|| {
        format!("creating scheme cache {}", config.schemes_cache_dir.display())
    })?;
    std::fs::create_dir_all(&config.templates_cache_dir).with_context(|| {
        format!("creating template cache {}", config.templates_cache_dir.display())
    })?;

    apply(&config, args, &HttpFetcher, log)
}

/// Registry resolution and rendering, parameterized over the fetcher so
/// tests can drive the whole flow without a network.
///
/// # Errors
///
/// See [`run`].
pub fn apply(config: &Config, args: &Cli, fetch: &dyn Fetch, log: &Logger) -> Result<()> {
    if args.update_list {
        log.stage("updating colorscheme and template lists");
        Registry::<SchemeEntry>::update(&config.schemes_list_file, &config.schemes_list_url, fetch)
            .context("updating schemes")?;
        Registry::<Template>::update(
            &config.templates_list_file,
            &config.templates_list_url,
            fetch,
        )
        .context("updating templates")?;
    }

    let schemes = Registry::<SchemeEntry>::load(&config.schemes_list_file)
        .context("loading colorscheme list")?;
    let templates =
        Registry::<Template>::load(&config.templates_list_file).context("loading template list")?;

    let scheme_name = args.scheme.as_deref().unwrap_or(&config.colorscheme);
    let entry = schemes
        .find(scheme_name)
        .with_context(|| format!("selecting scheme \"{scheme_name}\""))?;
    let scheme = Colorscheme::load(entry, &config.schemes_cache_dir, fetch)?;
    log.info(&format!("selected scheme: {}", scheme.name));

    let renderer = Renderer::new(fetch, log, &config.templates_cache_dir);
    let mut any_enabled = false;
    for (app_name, app) in &config.applications {
        if !app.enabled {
            continue;
        }
        any_enabled = true;

        let template_name = if app.template.is_empty() {
            app_name
        } else {
            &app.template
        };

        // Applications fail independently: a broken template or target for
        // one never aborts the rest of the run.
        let outcome = templates
            .find(template_name)
            .with_context(|| format!("finding template \"{template_name}\""))
            .and_then(|template| {
                renderer.render(
                    template,
                    &scheme,
                    app_name,
                    app,
                    effective_dry_run(config, app, args.dry_run),
                )
            });
        if let Err(e) = outcome {
            log.error(&format!("{app_name}: {e:#}"));
        }
    }

    if !any_enabled {
        log.info("no templates enabled");
    }
    Ok(())
}

/// The dry-run flag that applies to one application: the CLI flag forces a
/// dry run, otherwise the per-application override wins over the global
/// configuration value.
fn effective_dry_run(config: &Config, app: &ApplicationConfig, cli_dry_run: bool) -> bool {
    cli_dry_run || app.dry_run.unwrap_or(config.dry_run)
}

/// Delete both registry cache files. Each deletion is reported on its own;
/// a failure never aborts the sibling deletion.
fn clear_cache_files(config: &Config, log: &Logger) {
    let targets = [
        ("colorscheme list", &config.schemes_list_file),
        ("template list", &config.templates_list_file),
    ];
    for (label, path) in targets {
        match std::fs::remove_file(path) {
            Ok(()) => log.info(&format!("deleted cached {label} {}", path.display())),
            Err(e) => log.error(&format!("deleting cached {label}: {e}")),
        }
    }
}

/// Delete a body cache directory, reporting the outcome. A directory that
/// is already absent counts as deleted.
fn clear_cache_dir(dir: &Path, label: &str, log: &Logger) {
    match std::fs::remove_dir_all(dir) {
        Ok(()) => log.info(&format!("deleted cached {label} {}", dir.display())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log.info(&format!("deleted cached {label} {}", dir.display()));
        }
        Err(e) => log.error(&format!("deleting cached {label}: {e}")),
    }
}
