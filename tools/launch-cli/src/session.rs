//! The interactive collection session.
//!
//! One sequential pass: load, collect redirects, collect rewrites, collect
//! cache priming URLs, clean up, write. Each step takes the builder by
//! value and hands it back, so the working document is never ambient state.

use std::path::Path;

use anyhow::{bail, Result};
use launch_config::{
    parse_status_code, parse_url_list, LaunchConfigBuilder, LaunchConfigError, Redirect, Rewrite,
    LAUNCH_CONFIG_FILE,
};

use crate::output::Output;
use crate::prompt::{is_affirmative, PromptSource};

/// Sentinel probed (never parsed) to confirm we are in a project root.
const PROJECT_MANIFEST: &str = "package.json";

/// Run one full session against `cwd`.
pub fn run(cwd: &Path, prompt: &mut dyn PromptSource, output: &Output) -> Result<()> {
    output.header("Launch Configuration Generator");

    if !cwd.join(PROJECT_MANIFEST).exists() {
        bail!("Root directory not detected.");
    }

    let path = cwd.join(LAUNCH_CONFIG_FILE);
    let builder = load_builder(&path, output)?;
    let builder = collect_redirects(builder, prompt, output)?;
    let builder = collect_rewrites(builder, prompt, output)?;
    let builder = collect_priming_urls(builder, prompt, output)?;

    launch_config::save(&path, &builder.finish())?;
    output.success("Successfully updated launch.json!");

    Ok(())
}

/// Load any existing document into working shape.
///
/// A malformed document is never fatal: the session warns and starts from
/// the default document instead.
fn load_builder(path: &Path, output: &Output) -> Result<LaunchConfigBuilder> {
    if !path.exists() {
        return Ok(LaunchConfigBuilder::default());
    }

    output.info("Existing launch.json found. We will merge your changes.");
    match launch_config::load(path) {
        Ok(Some(config)) => Ok(LaunchConfigBuilder::from_config(config)),
        Ok(None) => Ok(LaunchConfigBuilder::default()),
        Err(LaunchConfigError::Parse { .. }) => {
            output.warn("Error parsing existing launch.json. Starting with a fresh config.");
            Ok(LaunchConfigBuilder::default())
        }
        Err(e) => Err(e.into()),
    }
}

fn collect_redirects(
    mut builder: LaunchConfigBuilder,
    prompt: &mut dyn PromptSource,
    output: &Output,
) -> Result<LaunchConfigBuilder> {
    loop {
        let question = if builder.redirects().is_empty() {
            "Do you want to add a Redirect? (y/n)"
        } else {
            "Do you want to add another Redirect? (y/n)"
        };
        if !is_affirmative(&prompt.line(question)?) {
            break;
        }

        let source = prompt.line("   Source path (e.g., /source)")?;
        let destination = prompt.line("   Destination path (e.g., /destination)")?;
        let code = prompt.line("   Status code (default 308)")?;
        builder.push_redirect(Redirect::new(source, destination, parse_status_code(&code)));
        output.success("Redirect added.");
    }

    Ok(builder)
}

fn collect_rewrites(
    mut builder: LaunchConfigBuilder,
    prompt: &mut dyn PromptSource,
    output: &Output,
) -> Result<LaunchConfigBuilder> {
    loop {
        let question = if builder.rewrites().is_empty() {
            "Do you want to add a Rewrite? (y/n)"
        } else {
            "Do you want to add another Rewrite? (y/n)"
        };
        if !is_affirmative(&prompt.line(question)?) {
            break;
        }

        let source = prompt.line("   Source path (e.g., /api/*)")?;
        let destination = prompt.line("   Destination URL")?;
        builder.push_rewrite(Rewrite::new(source, destination));
        output.success("Rewrite added.");
    }

    Ok(builder)
}

fn collect_priming_urls(
    mut builder: LaunchConfigBuilder,
    prompt: &mut dyn PromptSource,
    output: &Output,
) -> Result<LaunchConfigBuilder> {
    if !is_affirmative(&prompt.line("Do you want to add Cache Priming URLs? (y/n)")?) {
        return Ok(builder);
    }

    output.info("Note: Only relative paths are supported. No Regex/Wildcards.");
    let urls = prompt.line("Enter URLs separated by commas (e.g., /home,/about,/shop)")?;
    builder.prime_urls(parse_url_list(&urls));

    Ok(builder)
}
