use crate::*;

/// Слой: упорядоченный список номеров нейронов графа.
/// Порядок нужен только для обхода.
#[derive(Clone, Debug)]
pub struct Layer {
    neurons: Vec<NeuronId>,
    activation: Activation,
}

impl Layer {
    /// Конструктор
    pub fn new(neurons: Vec<NeuronId>, activation: Activation) -> Self {
        Self { neurons, activation }
    }
    /// Создание слоя из новых нейронов (с одинаковым смещением) в графе
    pub fn populate(graph: &mut Graph, topology: &LayerTopology, bias: f64) -> Self {
        let neurons = (0..topology.neurons)
            .map(|_| graph.add_neuron(Neuron::new(topology.activation, bias)))
            .collect();
        Self::new(neurons, topology.activation)
    }
    pub fn neurons(&self) -> &[NeuronId] {
        &self.neurons
    }
    pub fn activation(&self) -> Activation {
        self.activation
    }
    pub fn len(&self) -> usize {
        self.neurons.len()
    }
    pub fn is_empty(&self) -> bool {
        self.neurons.is_empty()
    }
    pub fn topology(&self) -> LayerTopology {
        LayerTopology {
            neurons: self.len(),
            activation: self.activation,
        }
    }
    /// Выходы нейронов слоя. Предыдущие слои должны быть уже рассчитаны.
    pub fn compute_outputs(&self, graph: &mut Graph) {
        for &id in &self.neurons {
            let net = graph.net_input(id);
            let neuron = &mut graph[id];
            neuron.set_raw_input(net);
            neuron.transfer();
        }
    }
    pub fn outputs(&self, graph: &Graph) -> Vec<f64> {
        self.neurons.iter().map(|&id| graph[id].output()).collect()
    }
    /// Обновление весов входных связей и смещений (дельты уже посчитаны)
    pub fn update_weights(&self, graph: &mut Graph, learning_rate: f64) {
        for &id in &self.neurons {
            graph.update_incoming(id, learning_rate);
        }
    }
    /// Убрать нейроны из слоя (из графа они удаляются отдельно)
    pub(crate) fn retain(&mut self, keep: impl FnMut(&NeuronId) -> bool) {
        self.neurons.retain(keep);
    }
}
