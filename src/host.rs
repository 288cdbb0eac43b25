//! Mounting forms onto a host surface
//!
//! A surface is anything that can name places to put a form: a terminal
//! screen, a page, a test double. [`mount`] looks the target up and hands
//! back a [`FormHandle`] owning an independent [`LeadForm`].

use std::sync::Arc;

use uuid::Uuid;

use crate::error::MountError;
use crate::form::LeadForm;
use crate::state::OptionCatalog;
use crate::submit::SubmitTransport;

/// Attribute that marks a target for [`auto_mount`]
pub const AUTO_MOUNT_MARKER: &str = "data-serious-erp-form";

/// Something forms can be mounted onto
pub trait MountSurface {
    /// Whether `target_id` names a mountable place on this surface
    fn contains_target(&self, target_id: &str) -> bool;

    /// Targets carrying [`AUTO_MOUNT_MARKER`]
    fn auto_mount_targets(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Dependencies shared by every form mounted with these options
#[derive(Clone)]
pub struct MountOptions {
    pub catalog: Arc<OptionCatalog>,
    pub transport: Arc<dyn SubmitTransport>,
}

impl MountOptions {
    pub fn new(catalog: OptionCatalog, transport: Arc<dyn SubmitTransport>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            transport,
        }
    }
}

/// A mounted form and the target it lives on
pub struct FormHandle {
    id: Uuid,
    target: String,
    form: LeadForm,
}

impl FormHandle {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn form(&self) -> &LeadForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut LeadForm {
        &mut self.form
    }

    /// Unmount, dropping all form state
    pub fn teardown(self) {
        tracing::debug!(id = %self.id, target = %self.target, "form unmounted");
    }
}

/// Mount a fresh form on `target_id`.
///
/// An unknown target is logged and yields `None`; it is never fatal.
pub fn mount(
    surface: &dyn MountSurface,
    target_id: &str,
    options: &MountOptions,
) -> Option<FormHandle> {
    match try_mount(surface, target_id, options) {
        Ok(handle) => Some(handle),
        Err(e) => {
            tracing::error!(error = %e, "form not mounted");
            None
        }
    }
}

fn try_mount(
    surface: &dyn MountSurface,
    target_id: &str,
    options: &MountOptions,
) -> Result<FormHandle, MountError> {
    if !surface.contains_target(target_id) {
        return Err(MountError::UnknownTarget(target_id.to_string()));
    }

    let handle = FormHandle {
        id: Uuid::new_v4(),
        target: target_id.to_string(),
        form: LeadForm::new(options.catalog.clone(), options.transport.clone()),
    };
    tracing::info!(id = %handle.id, target = target_id, "form mounted");
    Ok(handle)
}

/// Mount one form on every marked target of the surface
pub fn auto_mount(surface: &dyn MountSurface, options: &MountOptions) -> Vec<FormHandle> {
    surface
        .auto_mount_targets()
        .iter()
        .filter_map(|target| mount(surface, target, options))
        .collect()
}
