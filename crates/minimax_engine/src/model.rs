//! ONNX scalar-model loading and inference.

use std::path::Path;

use tract_onnx::prelude::*;

use crate::error::EngineError;
use crate::features::NUM_FEATURES;

type RunnableModel = SimplePlan<TypedFact, Box<dyn TypedOp>, Graph<TypedFact, Box<dyn TypedOp>>>;

/// A pre-trained model mapping the position encoding to one scalar.
///
/// Weights are loaded once at engine construction and shared read-only by
/// every evaluation afterwards.
#[derive(Debug)]
pub struct ScalarModel {
    plan: RunnableModel,
}

impl ScalarModel {
    /// Loads an ONNX model and validates its input width.
    pub fn load(path: &Path) -> Result<Self, EngineError> {
        if !path.exists() {
            return Err(EngineError::ModelMissing(path.to_owned()));
        }

        let plan = tract_onnx::onnx()
            .model_for_path(path)
            .map_err(|e| EngineError::ModelLoad(e.to_string()))?
            .into_optimized()
            .map_err(|e| EngineError::ModelLoad(e.to_string()))?
            .into_runnable()
            .map_err(|e| EngineError::ModelLoad(e.to_string()))?;

        // The encoding contract is fixed; reject models built for any
        // other input shape instead of padding or truncating.
        let input_fact = plan
            .model()
            .input_fact(0)
            .map_err(|e| EngineError::ModelLoad(e.to_string()))?;
        let width = input_fact
            .shape
            .iter()
            .filter_map(|dim| dim.to_i64().ok())
            .product::<i64>() as usize;
        if width != NUM_FEATURES {
            return Err(EngineError::ModelShape {
                expected: NUM_FEATURES,
                found: width,
            });
        }

        Ok(Self { plan })
    }

    /// Runs forward inference, returning the model's single output value.
    pub fn forward(&self, features: &[f32]) -> Result<f32, EngineError> {
        let input: Tensor =
            tract_ndarray::Array::from_shape_vec((1, NUM_FEATURES), features.to_vec())
                .map_err(|e| EngineError::ModelLoad(e.to_string()))?
                .into();

        let outputs = self
            .plan
            .run(tvec!(input.into()))
            .map_err(|e| EngineError::ModelLoad(e.to_string()))?;
        let view = outputs[0]
            .to_array_view::<f32>()
            .map_err(|e| EngineError::ModelLoad(e.to_string()))?;
        Ok(view.iter().next().copied().unwrap_or(0.0))
    }
}
