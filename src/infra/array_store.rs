// ============================================================
// Layer 6 — Encoded Array Store
// ============================================================
// Saves an encoded dataset as NumPy .npy files so training code
// in any language can load it directly.
//
// Directory layout:
//   out/
//     encoder_input.npy     ← u32 [samples, max_sequences]
//     encoder_lengths.npy   ← u64 [samples]
//     decoder_input.npy     ← u32 [samples, max_sequences]
//     decoder_lengths.npy   ← u64 [samples]
//     decoder_target.npy    ← u32 [samples, max_sequences]
//     prepare_config.json   ← settings used to produce the arrays

use std::{
    fs::{self, File},
    io::{BufReader, BufWriter},
    path::{Path, PathBuf},
};

use ndarray::{Array1, Array2};
use ndarray_npy::{ReadNpyExt, WriteNpyExt};
use serde::{de::DeserializeOwned, Serialize};

use crate::data::dataset::Seq2SeqDataset;
use crate::error::{PrepError, Result};

pub const ENCODER_INPUT: &str = "encoder_input.npy";
pub const ENCODER_LENGTHS: &str = "encoder_lengths.npy";
pub const DECODER_INPUT: &str = "decoder_input.npy";
pub const DECODER_LENGTHS: &str = "decoder_lengths.npy";
pub const DECODER_TARGET: &str = "decoder_target.npy";
pub const CONFIG_FILE: &str = "prepare_config.json";

/// Reads and writes encoded datasets in one directory.
pub struct ArrayStore {
    dir: PathBuf,
}

impl ArrayStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write all five arrays.
    pub fn save_dataset(&self, ds: &Seq2SeqDataset) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| PrepError::io(&self.dir, e))?;

        self.write_matrix(ENCODER_INPUT, &ds.encoder_input)?;
        self.write_lengths(ENCODER_LENGTHS, &ds.encoder_lengths)?;
        self.write_matrix(DECODER_INPUT, &ds.decoder_input)?;
        self.write_lengths(DECODER_LENGTHS, &ds.decoder_lengths)?;
        self.write_matrix(DECODER_TARGET, &ds.decoder_target)?;

        tracing::info!(
            "Saved {} encoded samples to '{}'",
            ds.len(),
            self.dir.display()
        );
        Ok(())
    }

    /// Read back a dataset written by [`ArrayStore::save_dataset`].
    pub fn load_dataset(&self) -> Result<Seq2SeqDataset> {
        Ok(Seq2SeqDataset {
            encoder_input:   self.read_matrix(ENCODER_INPUT)?,
            encoder_lengths: self.read_lengths(ENCODER_LENGTHS)?,
            decoder_input:   self.read_matrix(DECODER_INPUT)?,
            decoder_lengths: self.read_lengths(DECODER_LENGTHS)?,
            decoder_target:  self.read_matrix(DECODER_TARGET)?,
        })
    }

    /// Save the settings that produced the arrays as pretty JSON.
    pub fn save_config<T: Serialize>(&self, cfg: &T) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| PrepError::io(&self.dir, e))?;
        let path = self.dir.join(CONFIG_FILE);

        let json = serde_json::to_string_pretty(cfg)
            .map_err(|source| PrepError::Json { path: path.clone(), source })?;
        fs::write(&path, json).map_err(|e| PrepError::io(&path, e))?;

        tracing::debug!("Saved config to '{}'", path.display());
        Ok(())
    }

    pub fn load_config<T: DeserializeOwned>(&self) -> Result<T> {
        let path = self.dir.join(CONFIG_FILE);
        let json = fs::read_to_string(&path).map_err(|e| PrepError::io(&path, e))?;
        serde_json::from_str(&json).map_err(|source| PrepError::Json { path, source })
    }

    fn write_matrix(&self, name: &str, arr: &Array2<u32>) -> Result<()> {
        let path = self.dir.join(name);
        let file = File::create(&path).map_err(|e| PrepError::io(&path, e))?;
        arr.write_npy(BufWriter::new(file))
            .map_err(|e| PrepError::Npy(format!("cannot write '{}': {e}", path.display())))?;
        tracing::debug!("Wrote {} {:?}", name, arr.shape());
        Ok(())
    }

    fn write_lengths(&self, name: &str, lengths: &[usize]) -> Result<()> {
        let arr: Array1<u64> = lengths.iter().map(|&n| n as u64).collect();
        let path = self.dir.join(name);
        let file = File::create(&path).map_err(|e| PrepError::io(&path, e))?;
        arr.write_npy(BufWriter::new(file))
            .map_err(|e| PrepError::Npy(format!("cannot write '{}': {e}", path.display())))?;
        Ok(())
    }

    fn read_matrix(&self, name: &str) -> Result<Array2<u32>> {
        let path = self.dir.join(name);
        let file = File::open(&path).map_err(|e| PrepError::io(&path, e))?;
        Array2::<u32>::read_npy(BufReader::new(file))
            .map_err(|e| PrepError::Npy(format!("cannot read '{}': {e}", path.display())))
    }

    fn read_lengths(&self, name: &str) -> Result<Vec<usize>> {
        let path = self.dir.join(name);
        let file = File::open(&path).map_err(|e| PrepError::io(&path, e))?;
        let arr  = Array1::<u64>::read_npy(BufReader::new(file))
            .map_err(|e| PrepError::Npy(format!("cannot read '{}': {e}", path.display())))?;
        Ok(arr.iter().map(|&n| n as usize).collect())
    }
}
