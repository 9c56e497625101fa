//! Model loading utilities for safetensors format.

use anyhow::{Context, Result};
use candle_core::{DType, Device, Tensor};
use candle_nn::VarBuilder;
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

use safetensors::SafeTensors;

/// A lazily-loaded model that defers loading until first access.
///
/// The original program constructed its model inside the same guarded block
/// as the prediction itself; deferring the load to the first prediction keeps
/// construction failures flowing through the same error path.
pub struct LazyModel<T> {
    path: std::path::PathBuf,
    device: Device,
    builder: fn(VarBuilder) -> Result<T>,
    model: OnceCell<T>,
}

impl<T: Send + Sync> LazyModel<T> {
    /// Creates a new lazy model loader.
    ///
    /// The model will not be loaded until `get()` is called.
    #[must_use]
    pub fn new(path: impl AsRef<Path>, device: Device, builder: fn(VarBuilder) -> Result<T>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            device,
            builder,
            model: OnceCell::new(),
        }
    }

    /// Gets the model, loading it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The model file cannot be read
    /// - The safetensors data is invalid
    /// - The model builder fails
    pub fn get(&self) -> Result<&T> {
        self.model.get_or_try_init(|| {
            debug!("Loading model from {}", self.path.display());
            let vb = load_safetensors(&self.path, &self.device)?;
            (self.builder)(vb)
        })
    }

    /// Returns true if the model has been loaded.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.model.get().is_some()
    }
}

/// Loads a safetensors file and creates a `VarBuilder` for the model.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The safetensors data is invalid
/// - Any tensor is not f32
pub fn load_safetensors(path: impl AsRef<Path>, device: &Device) -> Result<VarBuilder<'static>> {
    let path = path.as_ref();
    debug!("Loading safetensors from {}", path.display());

    let data = std::fs::read(path)
        .with_context(|| format!("Failed to read model file: {}", path.display()))?;

    let tensors = SafeTensors::deserialize(&data)
        .with_context(|| format!("Failed to parse safetensors: {}", path.display()))?;

    let mut tensor_map: HashMap<String, Tensor> = HashMap::new();

    for name in tensors.names() {
        let tensor_view = tensors
            .tensor(name)
            .with_context(|| format!("Failed to get tensor '{name}'"))?;

        // Regression artifacts are f32 end to end.
        if tensor_view.dtype() != safetensors::Dtype::F32 {
            anyhow::bail!(
                "Tensor '{name}' has dtype {:?}, expected F32",
                tensor_view.dtype()
            );
        }
        let shape: Vec<usize> = tensor_view.shape().to_vec();

        let tensor = Tensor::from_raw_buffer(tensor_view.data(), DType::F32, &shape, device)
            .with_context(|| format!("Failed to create tensor '{name}'"))?;

        tensor_map.insert(name.to_string(), tensor);
    }

    Ok(VarBuilder::from_tensors(tensor_map, DType::F32, device))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[allow(clippy::expect_used)]
    fn create_test_safetensors() -> NamedTempFile {
        use safetensors::serialize;
        use safetensors::tensor::TensorView;

        let weight: Vec<f32> = vec![0.0, 3600.0, 0.0];
        let bias: Vec<f32> = vec![0.0];

        let weight_view =
            TensorView::new(safetensors::Dtype::F32, vec![1, 3], bytemuck::cast_slice(&weight))
                .expect("valid tensor view");
        let bias_view =
            TensorView::new(safetensors::Dtype::F32, vec![1], bytemuck::cast_slice(&bias))
                .expect("valid tensor view");

        let tensors = HashMap::from([
            ("linear.weight".to_string(), weight_view),
            ("linear.bias".to_string(), bias_view),
        ]);
        let serialized = serialize(&tensors, &None).expect("serialize");

        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(&serialized).expect("write");
        file
    }

    #[test]
    fn test_load_safetensors() {
        let file = create_test_safetensors();
        let result = load_safetensors(file.path(), &Device::Cpu);
        assert!(result.is_ok());
    }

    #[test]
    #[allow(clippy::expect_used, clippy::unwrap_used)]
    fn test_load_safetensors_rejects_non_f32() {
        use safetensors::serialize;
        use safetensors::tensor::TensorView;

        let weight: Vec<f64> = vec![0.0, 3600.0, 0.0];
        let weight_view =
            TensorView::new(safetensors::Dtype::F64, vec![1, 3], bytemuck::cast_slice(&weight))
                .expect("valid tensor view");
        let tensors = HashMap::from([("linear.weight".to_string(), weight_view)]);
        let serialized = serialize(&tensors, &None).expect("serialize");

        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(&serialized).expect("write");

        let err = load_safetensors(file.path(), &Device::Cpu)
            .err()
            .expect("expected load failure");
        assert!(err.to_string().contains("expected F32"), "got: {err:#}");
    }

    #[test]
    fn test_load_safetensors_missing_file() {
        let result = load_safetensors("/nonexistent/path.safetensors", &Device::Cpu);
        assert!(result.is_err());
    }

    #[test]
    fn test_lazy_model_defers_until_get() {
        let file = create_test_safetensors();
        let lazy = LazyModel::new(file.path(), Device::Cpu, crate::inference::SleepRegressor::new);
        assert!(!lazy.is_loaded());
        assert!(lazy.get().is_ok());
        assert!(lazy.is_loaded());
    }

    #[test]
    fn test_lazy_model_missing_file_errors_on_get() {
        let lazy = LazyModel::new(
            "/nonexistent/path.safetensors",
            Device::Cpu,
            crate::inference::SleepRegressor::new,
        );
        assert!(lazy.get().is_err());
    }
}
