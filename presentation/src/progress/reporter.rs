//! Progress reporting for orchestration turns

use colored::Colorize;
use hospital_application::PhaseObserver;
use hospital_domain::{CapabilityGroup, PhaseEvent};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// What the UI says while a group is working
pub fn thinking_text(group: CapabilityGroup) -> String {
    if group.is_orchestrator() {
        "Orkestrator sedang menganalisis...".to_string()
    } else {
        format!("Menghubungi {}...", group.label())
    }
}

/// Spinner that follows the active group during a turn
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn start(&self) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(thinking_text(CapabilityGroup::Orchestrator));
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock()
            && let Some(old) = slot.replace(pb)
        {
            old.finish_and_clear();
        }
    }

    fn update(&self, group: CapabilityGroup) {
        if let Ok(slot) = self.spinner.lock()
            && let Some(pb) = slot.as_ref()
        {
            pb.set_message(thinking_text(group));
        }
    }

    fn finish(&self) {
        if let Ok(mut slot) = self.spinner.lock()
            && let Some(pb) = slot.take()
        {
            pb.finish_and_clear();
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl PhaseObserver for ProgressReporter {
    fn on_event(&self, event: &PhaseEvent) {
        match event {
            PhaseEvent::DecisionStarted => self.start(),
            PhaseEvent::CapabilityStarted { group, .. } => self.update(*group),
            PhaseEvent::CapabilityEnded { .. } => self.update(CapabilityGroup::Orchestrator),
            PhaseEvent::ModelFailed { .. } => {}
            PhaseEvent::Completed { .. } => self.finish(),
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl PhaseObserver for SimpleProgress {
    fn on_event(&self, event: &PhaseEvent) {
        match event {
            PhaseEvent::DecisionStarted => {
                println!("{} {}", "->".cyan(), thinking_text(CapabilityGroup::Orchestrator));
            }
            PhaseEvent::CapabilityStarted { group, capability } => {
                println!(
                    "{} {} ({})",
                    "->".cyan(),
                    thinking_text(*group).bold(),
                    capability.dimmed()
                );
            }
            PhaseEvent::CapabilityEnded { group } => {
                println!("  {} {}", "v".green(), group.label());
            }
            PhaseEvent::ModelFailed { error } => {
                println!("  {} {}", "x".red(), error);
            }
            PhaseEvent::Completed { .. } => println!(),
        }
    }
}
