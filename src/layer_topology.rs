use crate::*;

/// Топология слоя
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerTopology {
    /// Количество нейронов в слое
    pub neurons: usize,
    /// Функция активации слоя
    pub activation: Activation,
}

impl LayerTopology {
    /// Топология сети по размерам слоев: входной слой без активации
    /// (помечен Sigmoid, но выход задается напрямую), скрытые - hidden,
    /// последний - output.
    pub fn from_dimension(
        dimension: &[usize],
        hidden: Activation,
        output: Activation,
    ) -> Vec<LayerTopology> {
        let last = dimension.len().saturating_sub(1);
        dimension
            .iter()
            .enumerate()
            .map(|(i, &neurons)| LayerTopology {
                neurons,
                activation: if i == 0 {
                    Activation::Sigmoid
                } else if i == last {
                    output
                } else {
                    hidden
                },
            })
            .collect()
    }
}
