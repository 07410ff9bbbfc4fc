use crate::*;

/// Наклон отрицательной ветви LeakyRelu
pub const LEAKY_RELU_ALPHA: f64 = 0.01;

/// Функция активации нейрона (без состояния, копируется свободно)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Activation {
    /// 1 / (1 + e^-x)
    Sigmoid,
    /// x при x > 0, иначе 0.01 * x
    LeakyRelu,
}

impl Activation {
    /// Значение функции
    pub fn phi(&self, x: f64) -> f64 {
        match self {
            Self::Sigmoid => 1.0 / (1.0 + (-x).exp()),
            Self::LeakyRelu => {
                if x > 0.0 {
                    x
                } else {
                    LEAKY_RELU_ALPHA * x
                }
            }
        }
    }
    /// Производная по входу (x - сырой вход нейрона, а не его выход)
    pub fn derivative(&self, x: f64) -> f64 {
        match self {
            Self::Sigmoid => {
                let s = self.phi(x);
                s * (1.0 - s)
            }
            Self::LeakyRelu => {
                if x > 0.0 {
                    1.0
                } else {
                    LEAKY_RELU_ALPHA
                }
            }
        }
    }
    pub fn is_leaky_relu(&self) -> bool {
        matches!(self, Self::LeakyRelu)
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sigmoid => f.write_str("Sigmoid"),
            Self::LeakyRelu => f.write_str("Relu"),
        }
    }
}
