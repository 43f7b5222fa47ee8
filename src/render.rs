//! Per-application template rendering and write dispatch.
use anyhow::{Context as _, Result};
use std::collections::BTreeMap;
use std::path::Path;

use crate::config::{ApplicationConfig, FileTarget, WriteMode};
use crate::error::TargetError;
use crate::fetch::Fetch;
use crate::fsutil;
use crate::logging::Logger;
use crate::paths;
use crate::replace;
use crate::scheme::Colorscheme;
use crate::template::{FileSpec, Template};

/// Renders one application's files from a template and a colorscheme.
pub struct Renderer<'a> {
    fetch: &'a dyn Fetch,
    log: &'a Logger,
    templates_cache_dir: &'a Path,
}

impl<'a> Renderer<'a> {
    #[must_use]
    pub const fn new(fetch: &'a dyn Fetch, log: &'a Logger, templates_cache_dir: &'a Path) -> Self {
        Self {
            fetch,
            log,
            templates_cache_dir,
        }
    }

    /// Render every file the template declares for `app_name`, then run the
    /// application's hook.
    ///
    /// File keys are processed in order; the first fetch, render, or write
    /// failure aborts the remaining keys for this application (the caller
    /// decides whether other applications continue). File keys without a
    /// configured destination are skipped. A failing hook is reported but
    /// never invalidates files already written.
    ///
    /// # Errors
    ///
    /// Returns an error on the first failed file key, with the application
    /// and file key added as context.
    pub fn render(
        &self,
        template: &Template,
        scheme: &Colorscheme,
        app_name: &str,
        app: &ApplicationConfig,
        dry_run: bool,
    ) -> Result<()> {
        self.log.stage(&format!(
            "rendering template \"{}\" for {app_name}",
            template.name
        ));

        for (file_key, spec) in &template.files {
            self.render_file(template, scheme, app, file_key, spec, dry_run)
                .with_context(|| format!("{app_name}: file key \"{file_key}\""))?;
        }

        if dry_run {
            if !app.hook.is_empty() {
                self.log.dry_run(&format!("would run hook: {}", app.hook));
            }
        } else if let Err(e) = crate::exec::run_hook(&app.hook) {
            self.log.error(&format!("hook for {app_name}: {e:#}"));
        }
        Ok(())
    }

    fn render_file(
        &self,
        template: &Template,
        scheme: &Colorscheme,
        app: &ApplicationConfig,
        file_key: &str,
        spec: &FileSpec,
        dry_run: bool,
    ) -> Result<()> {
        // A file key the application config does not target is inert.
        let Some(target) = app.files.get(file_key) else {
            self.log
                .debug(&format!("no target configured for \"{file_key}\", skipping"));
            return Ok(());
        };

        let body = self.template_body(template, file_key, dry_run)?;
        let context = scheme.template_context(&spec.extension)?;
        let rendered = expand(&body, &context).context("expanding template body")?;

        let default_filename = format!("{file_key}{}", spec.extension);
        let Some(dest) = paths::resolve_target(&target.path, &default_filename)? else {
            self.log
                .debug(&format!("no destination configured for \"{file_key}\", skipping"));
            return Ok(());
        };

        if dry_run {
            self.log
                .dry_run(&format!("file would be written to: {}", dest.display()));
            return Ok(());
        }

        self.write_target(target, &dest, &rendered, file_key)
    }

    fn write_target(
        &self,
        target: &FileTarget,
        dest: &Path,
        rendered: &str,
        file_key: &str,
    ) -> Result<()> {
        match target.mode {
            WriteMode::Rewrite => {
                self.log.info(&format!("writing: {}", dest.display()));
                fsutil::ensure_parent_dir(dest)?;
                std::fs::write(dest, rendered)
                    .with_context(|| format!("writing {}", dest.display()))?;
            }
            WriteMode::Replace => {
                if target.start_marker.is_empty() || target.end_marker.is_empty() {
                    return Err(TargetError::MissingMarkers {
                        file_key: file_key.to_string(),
                    }
                    .into());
                }
                self.log.info(&format!("replacing in: {}", dest.display()));
                replace::replace_section(dest, rendered, &target.start_marker, &target.end_marker)?;
            }
            WriteMode::NoOp => {
                self.log.warn(&format!(
                    "no write mode configured for \"{file_key}\", leaving {} untouched",
                    dest.display()
                ));
            }
        }
        Ok(())
    }

    /// Fetch a template body through the on-disk cache at
    /// `<cache_dir>/<template>/<file_key>.tmpl`. Dry runs still fetch but
    /// never touch the cache.
    fn template_body(&self, template: &Template, file_key: &str, dry_run: bool) -> Result<String> {
        let cached = self
            .templates_cache_dir
            .join(&template.name)
            .join(format!("{file_key}.tmpl"));
        if cached.exists() {
            return std::fs::read_to_string(&cached)
                .with_context(|| format!("reading cached template body {}", cached.display()));
        }

        let url = template.body_url(file_key);
        let body = self
            .fetch
            .get_text(&url)
            .with_context(|| format!("fetching template body for \"{}\"", template.name))?;
        if !dry_run {
            fsutil::ensure_parent_dir(&cached)?;
            std::fs::write(&cached, &body)
                .with_context(|| format!("caching template body {}", cached.display()))?;
        }
        Ok(body)
    }
}

/// Expand a template body against the context via the expansion engine.
fn expand(body: &str, context: &BTreeMap<String, String>) -> Result<String> {
    let mut env = minijinja::Environment::new();
    env.add_template("body", body)
        .context("parsing template body")?;
    let template = env.get_template("body").context("loading template body")?;
    template.render(context).context("rendering template body")
}
