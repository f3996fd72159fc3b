//! Host environment: owns the image and the input queues

use serde::Serialize;

use bsearch_core::constants::ENTRY_POINT;
use bsearch_core::{bsearch_traced, Probe, Provenance, QueuedInput, SearchImage};

use crate::error::{HostError, Result};

/// Outcome of one export invocation
#[derive(Debug, Clone, Serialize)]
pub struct Execution {
    pub export: String,
    pub image_digest: String,
    pub target: u64,
    /// Index or the image's `FAILED` sentinel
    pub result: u32,
    pub found: bool,
    pub probes: Vec<Probe>,
    /// Public values read by this invocation
    pub public_consumed: usize,
    /// Private values read by this invocation
    pub private_consumed: usize,
}

/// Host side of the guest: image plus pre-provisioned inputs
pub struct HostEnv {
    image: SearchImage,
    input: QueuedInput,
    digest: String,
}

impl HostEnv {
    pub fn new(image: SearchImage) -> Self {
        let digest = image.digest_hex();
        Self {
            image,
            input: QueuedInput::default(),
            digest,
        }
    }

    /// Queue public and private values, in order, behind any already queued
    pub fn register_inputs(&mut self, public: Vec<u64>, private: Vec<u64>) {
        tracing::debug!(
            public = public.len(),
            private = private.len(),
            "Registering inputs"
        );

        for value in public {
            self.input.push(Provenance::Public, value);
        }
        for value in private {
            self.input.push(Provenance::Private, value);
        }
    }

    /// Run the named export once
    pub fn invoke(&mut self, export: &str) -> Result<Execution> {
        if export != ENTRY_POINT {
            return Err(HostError::UnknownExport(export.to_string()));
        }

        let public_before = self.input.consumed(Provenance::Public);
        let private_before = self.input.consumed(Provenance::Private);

        let run = bsearch_traced(&self.image, &mut self.input).inspect_err(|e| {
            tracing::warn!(export, digest = %self.digest, error = %e, "Invocation failed");
        })?;

        let execution = Execution {
            export: export.to_string(),
            image_digest: self.digest.clone(),
            target: run.target,
            result: run.result,
            found: run.found,
            probes: run.probes,
            public_consumed: self.input.consumed(Provenance::Public) - public_before,
            private_consumed: self.input.consumed(Provenance::Private) - private_before,
        };

        tracing::info!(
            export,
            digest = %self.digest,
            target = execution.target,
            result = execution.result,
            found = execution.found,
            probes = execution.probes.len(),
            "Invocation finished"
        );

        Ok(execution)
    }

    pub fn image(&self) -> &SearchImage {
        &self.image
    }

    /// Values still queued on a channel
    pub fn remaining(&self, provenance: Provenance) -> usize {
        self.input.remaining(provenance)
    }
}
