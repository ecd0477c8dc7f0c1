//! Subcommand execution against a [`Kennel`].
//!
//! Text goes to the supplied writer so tests can capture it; logs go through
//! `tracing`.

use crate::cli::Invocation;
use anyhow::{Context, Result};
use kennel_core::{Dog, DogId, Kennel, KennelConfig};
use std::io::Write;

/// Resolve the roster an invocation runs against
///
/// # Errors
/// Fails when a roster file cannot be read or parsed.
pub fn load_config(invocation: &Invocation) -> Result<KennelConfig> {
    match invocation {
        Invocation::Demo { .. } => Ok(KennelConfig::demo()),
        Invocation::Run { config, .. } => KennelConfig::load(config)
            .with_context(|| format!("loading roster {}", config.display())),
        Invocation::Info { .. } => Ok(KennelConfig::default()),
    }
}

/// Run an invocation, writing its output to `out`
///
/// # Errors
/// Fails on roster errors or when `out` cannot be written.
pub fn execute(
    invocation: &Invocation,
    config: &KennelConfig,
    out: &mut impl Write,
) -> Result<()> {
    match invocation {
        Invocation::Demo { json } => demo(config, *json, out),
        Invocation::Run { json, .. } => {
            let kennel = Kennel::from_config(config).context("applying roster")?;
            if *json {
                write_json(&kennel, out)
            } else {
                report(&kennel, out)
            }
        }
        Invocation::Info {
            name,
            age,
            birthdays,
        } => {
            let mut dog = Dog::new(name.clone(), *age);
            dog.birthdays(*birthdays);
            writeln!(out, "{}", dog.info())?;
            Ok(())
        }
    }
}

/// Adopt the roster's dogs one by one, then celebrate, then pair them up
fn demo(config: &KennelConfig, json: bool, out: &mut impl Write) -> Result<()> {
    let mut kennel = Kennel::with_config(config.clone());
    let mut adopted: Vec<DogId> = Vec::with_capacity(config.dogs.len());

    for entry in &config.dogs {
        let id = kennel.adopt(entry.name.clone(), entry.age);
        adopted.push(id);
        if !json {
            writeln!(out, "{}", kennel.bark(id)?)?;
            writeln!(out, "{}", kennel.info(id)?)?;
        }
    }

    if let Some(&first) = adopted.first() {
        kennel.birthday(first)?;
        if !json {
            writeln!(out, "{}", kennel.info(first)?)?;
        }
    }

    for pair in &config.buddies {
        let [a, b] = &pair.pair;
        let a = kennel
            .find_by_name(a)
            .with_context(|| format!("demo roster has no dog named {a}"))?;
        let b = kennel
            .find_by_name(b)
            .with_context(|| format!("demo roster has no dog named {b}"))?;
        kennel.set_buddy(a, b)?;
    }

    if json {
        return write_json(&kennel, out);
    }
    for (id, _) in kennel.iter() {
        write_buddy_line(&kennel, id, out)?;
    }
    Ok(())
}

fn report(kennel: &Kennel, out: &mut impl Write) -> Result<()> {
    for (id, dog) in kennel.iter() {
        writeln!(out, "{}", dog.bark())?;
        writeln!(out, "{}", dog.info())?;
        write_buddy_line(kennel, id, out)?;
    }
    Ok(())
}

fn write_buddy_line(kennel: &Kennel, id: DogId, out: &mut impl Write) -> Result<()> {
    let dog = kennel.get(id)?;
    match dog.buddy() {
        Some(buddy) => writeln!(out, "{}'s buddy is {}", dog.name(), kennel.get(buddy)?.name())?,
        None => writeln!(out, "{} has no buddy", dog.name())?,
    }
    Ok(())
}

fn write_json(kennel: &Kennel, out: &mut impl Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, &kennel.snapshot())?;
    writeln!(out)?;
    Ok(())
}
