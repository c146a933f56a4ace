//! Interactive question flow that collects a task from the user.

mod prompt;

pub use prompt::Prompter;

use anyhow::Result;
use std::io::{BufRead, Write};

use crate::scoring::{Complexity, LayerType, Slice, SliceType, Task};

/// Ask for one slice's attributes.
pub fn ask_slice<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> Result<Slice> {
    let layer = p.prompt_choice("Which layer does the slice belong to?", &LayerType::ALL, |l| {
        l.as_str()
    })?;
    let slice_type = p.prompt_choice("What type of slice is it?", &SliceType::ALL, |t| t.as_str())?;
    let complexity = p.prompt_choice("How complex is the slice?", &Complexity::ALL, |c| {
        c.as_str()
    })?;

    let is_shared_across_features =
        p.prompt_yes_no("Is this slice referenced by other features?", false)?;
    let dependency_count = p.prompt_count("How many other slices does it depend on?", 0)?;
    let is_business_critical = p.prompt_yes_no("Is this a business-critical feature?", false)?;

    Ok(Slice {
        slice_type,
        complexity,
        layer,
        is_shared_across_features,
        dependency_count,
        is_business_critical,
    })
}

/// Run the full interview: one or more slices, then the whole-task questions.
pub fn run_interview<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> Result<Task> {
    let mut slices = Vec::new();

    loop {
        p.say("")?;
        p.say(&format!("Slice {}", slices.len() + 1))?;
        slices.push(ask_slice(p)?);

        if !p.prompt_yes_no("Add another slice?", true)? {
            break;
        }
    }

    p.say("")?;
    let has_test = p.prompt_yes_no("Does the work include test code?", true)?;
    let is_refactor = p.prompt_yes_no("Is this a refactor of an existing feature?", false)?;

    Ok(Task {
        slices,
        has_test,
        is_refactor,
    })
}
