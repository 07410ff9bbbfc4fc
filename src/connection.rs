use crate::*;

/// Направленная взвешенная связь между двумя нейронами.
/// Концы связи - номера нейронов в графе, связь ими не владеет.
#[derive(Clone, Debug)]
pub struct Connection {
    source: NeuronId,
    target: NeuronId,
    weight: f64,
    /// Вес до последнего обновления (изначально 0.0, а не начальный вес)
    previous_weight: f64,
    /// Сумма |изменений| веса
    cumulative_abs_delta: f64,
    /// Количество обновлений веса
    update_count: u64,
}

impl Connection {
    /// Конструктор
    pub fn new(source: NeuronId, target: NeuronId, weight: f64) -> Self {
        Self {
            source,
            target,
            weight,
            previous_weight: 0.0,
            cumulative_abs_delta: 0.0,
            update_count: 0,
        }
    }
    pub fn source(&self) -> NeuronId {
        self.source
    }
    pub fn target(&self) -> NeuronId {
        self.target
    }
    pub fn weight(&self) -> f64 {
        self.weight
    }
    pub fn previous_weight(&self) -> f64 {
        self.previous_weight
    }
    pub fn cumulative_abs_delta(&self) -> f64 {
        self.cumulative_abs_delta
    }
    pub fn update_count(&self) -> u64 {
        self.update_count
    }
    /// Новый вес. Изменение считается между текущим и предыдущим весом
    /// ДО обновления, т.е. отстает на одно обновление.
    pub fn set_weight(&mut self, weight: f64) {
        let delta = (self.weight - self.previous_weight).abs();
        self.previous_weight = self.weight;
        self.weight = weight;
        self.cumulative_abs_delta += delta;
        self.update_count += 1;
    }
    /// Нестабильность: среднее |изменение| веса за все обновления.
    /// None, пока вес ни разу не обновлялся.
    pub fn instability(&self) -> Option<f64> {
        if self.update_count == 0 {
            None
        } else {
            Some(self.cumulative_abs_delta / self.update_count as f64)
        }
    }
}
