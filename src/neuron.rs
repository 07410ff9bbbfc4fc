use crate::*;

/// Начальное смещение каждого нейрона
pub const DEFAULT_BIAS: f64 = -1.0;
/// Выход LeakyRelu-нейрона не выше этого порога считается неактивным
pub const INACTIVE_OUTPUT_THRESHOLD: f64 = 0.01;

/// Нейрон. Связями не владеет: хранит только их номера в графе.
#[derive(Clone, Debug)]
pub struct Neuron {
    /// Номера входных связей
    pub(crate) incoming: Vec<ConnectionId>,
    /// Номера выходных связей
    pub(crate) outgoing: Vec<ConnectionId>,
    activation: Activation,
    /// Взвешенная сумма входов + смещение
    raw_input: f64,
    output: f64,
    bias: f64,
    error: f64,
    delta: f64,
    /// Счетчик срабатываний (для всех функций, кроме LeakyRelu)
    activation_fired_count: u64,
    /// Счетчик неактивных передач (только для LeakyRelu)
    inactive_transfer_count: u64,
}

impl Neuron {
    /// Конструктор
    pub fn new(activation: Activation, bias: f64) -> Self {
        Self {
            incoming: Vec::new(),
            outgoing: Vec::new(),
            activation,
            raw_input: 0.0,
            output: 0.0,
            bias,
            error: 0.0,
            delta: 0.0,
            activation_fired_count: 0,
            inactive_transfer_count: 0,
        }
    }
    pub fn incoming(&self) -> &[ConnectionId] {
        &self.incoming
    }
    pub fn outgoing(&self) -> &[ConnectionId] {
        &self.outgoing
    }
    pub fn activation(&self) -> Activation {
        self.activation
    }
    pub fn raw_input(&self) -> f64 {
        self.raw_input
    }
    pub fn set_raw_input(&mut self, raw_input: f64) {
        self.raw_input = raw_input;
    }
    pub fn output(&self) -> f64 {
        self.output
    }
    /// Выход задается напрямую только у входного слоя (без активации)
    pub fn set_output(&mut self, output: f64) {
        self.output = output;
    }
    pub fn bias(&self) -> f64 {
        self.bias
    }
    pub fn error(&self) -> f64 {
        self.error
    }
    pub fn delta(&self) -> f64 {
        self.delta
    }
    pub fn activation_fired_count(&self) -> u64 {
        self.activation_fired_count
    }
    pub fn inactive_transfer_count(&self) -> u64 {
        self.inactive_transfer_count
    }
    /// Счетчик использования, соответствующий функции активации нейрона
    pub fn usage(&self) -> u64 {
        if self.activation.is_leaky_relu() {
            self.inactive_transfer_count
        } else {
            self.activation_fired_count
        }
    }
    /// Выход по сырому входу + учет статистики использования.
    /// Счетчики не сбрасываются за всю жизнь нейрона.
    pub fn transfer(&mut self) {
        self.output = self.activation.phi(self.raw_input);
        if self.activation.is_leaky_relu() {
            if self.output <= INACTIVE_OUTPUT_THRESHOLD {
                self.inactive_transfer_count += 1;
            }
        } else {
            self.activation_fired_count += 1;
        }
    }
    /// Ошибка выходного нейрона: выход - ожидаемое
    pub fn calc_error(&mut self, expected: f64) -> f64 {
        self.error = self.output - expected;
        self.error
    }
    pub fn reset_error(&mut self) {
        self.error = 0.0;
    }
    pub fn add_to_error(&mut self, value: f64) {
        self.error += value;
    }
    pub fn derivative(&self) -> f64 {
        self.activation.derivative(self.raw_input)
    }
    pub fn calc_delta(&mut self) {
        self.delta = self.error * self.derivative();
    }
    pub fn update_bias(&mut self, learning_rate: f64) {
        self.bias -= learning_rate * self.delta;
    }
}
