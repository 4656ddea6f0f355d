use crate::config::PackConfig;
use crate::context::gather;
use crate::context::reader;
use crate::context::record;
use crate::context::types::{Candidate, PackSummary};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use tracing::{info, warn};

/// Packs every accepted file under the configured root into one artifact.
pub struct Packer {
    config: PackConfig,
}

impl Packer {
    pub fn new(config: PackConfig) -> Self {
        Packer { config }
    }

    pub fn config(&self) -> &PackConfig {
        &self.config
    }

    /// Runs one pass: truncates the artifact, writes the intro, then one
    /// record per readable candidate. Unreadable candidates are reported and
    /// skipped; failures writing the artifact abort the run.
    pub fn run(&self) -> Result<PackSummary> {
        let output_path = self.config.output_path();
        let file = File::create(&output_path)
            .with_context(|| format!("creating {}", output_path.display()))?;
        let mut out = BufWriter::new(file);
        info!("packing {} into {}", self.config.root().display(), output_path.display());

        let mut summary = PackSummary::default();
        out.write_all(record::intro().as_bytes())
            .with_context(|| format!("writing {}", output_path.display()))?;

        let candidates = gather::gather_candidates(self.config.root(), &self.config.filters)?;
        for candidate in &candidates {
            self.pack_one(candidate, &mut out, &mut summary)
                .with_context(|| format!("writing {}", output_path.display()))?;
        }

        out.flush()
            .with_context(|| format!("flushing {}", output_path.display()))?;
        drop(out);

        summary.output = dunce::canonicalize(&output_path).unwrap_or(output_path);
        info!(
            "packed {} files, skipped {}",
            summary.packed.len(),
            summary.skipped.len()
        );
        Ok(summary)
    }

    fn pack_one(
        &self,
        candidate: &Candidate,
        out: &mut impl Write,
        summary: &mut PackSummary,
    ) -> Result<()> {
        match reader::read_candidate(candidate) {
            Ok(file) => {
                out.write_all(record::format_record(&file).as_bytes())?;
                println!("Packed: {}", file.display_path);
                summary.packed.push(file.display_path);
            }
            Err(reason) => {
                warn!("skipping {}: {reason}", candidate.display_path);
                println!("Skipped {} due to error: {reason}", candidate.display_path);
                summary
                    .skipped
                    .push((candidate.display_path.clone(), reason.to_string()));
            }
        }
        Ok(())
    }
}

/// Packs the current working directory and prints the closing summary.
pub fn run() -> Result<PackSummary> {
    let config = PackConfig::from_current_dir()?;
    let summary = Packer::new(config).run()?;
    println!();
    println!("All files packed into: {}", summary.output.display());
    Ok(summary)
}
