use crate::*;

/// Номер нейрона в графе
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NeuronId(pub usize);

/// Номер связи в графе
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ConnectionId(pub usize);

impl fmt::Display for NeuronId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c{}", self.0)
    }
}

/// Хранилище всех нейронов и связей сети.
/// Номера стабильны: удаленный элемент оставляет пустую ячейку,
/// которая больше не используется.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    neurons: Vec<Option<Neuron>>,
    connections: Vec<Option<Connection>>,
    /// Количество живых связей
    connection_count: usize,
    /// Количество живых нейронов
    neuron_count: usize,
}

impl Graph {
    /// Конструктор
    pub fn new() -> Self {
        Self::default()
    }
    pub fn add_neuron(&mut self, neuron: Neuron) -> NeuronId {
        let id = NeuronId(self.neurons.len());
        self.neurons.push(Some(neuron));
        self.neuron_count += 1;
        id
    }
    /// Новая связь source -> target, сразу прописывается в списки обоих концов
    pub fn connect(&mut self, source: NeuronId, target: NeuronId, weight: f64) -> ConnectionId {
        let id = ConnectionId(self.connections.len());
        self.connections.push(Some(Connection::new(source, target, weight)));
        self.connection_count += 1;
        self[source].outgoing.push(id);
        self[target].incoming.push(id);
        id
    }
    pub fn neuron(&self, id: NeuronId) -> Option<&Neuron> {
        self.neurons.get(id.0).and_then(Option::as_ref)
    }
    pub fn neuron_mut(&mut self, id: NeuronId) -> Option<&mut Neuron> {
        self.neurons.get_mut(id.0).and_then(Option::as_mut)
    }
    pub fn connection(&self, id: ConnectionId) -> Option<&Connection> {
        self.connections.get(id.0).and_then(Option::as_ref)
    }
    pub fn connection_mut(&mut self, id: ConnectionId) -> Option<&mut Connection> {
        self.connections.get_mut(id.0).and_then(Option::as_mut)
    }
    /// Все живые связи в порядке создания
    pub fn connections(&self) -> impl Iterator<Item = (ConnectionId, &Connection)> + '_ {
        self.connections
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.as_ref().map(|c| (ConnectionId(i), c)))
    }
    pub fn connection_count(&self) -> usize {
        self.connection_count
    }
    pub fn neuron_count(&self) -> usize {
        self.neuron_count
    }
    /// Взвешенная сумма входов нейрона + смещение
    pub fn net_input(&self, id: NeuronId) -> f64 {
        let neuron = &self[id];
        neuron
            .incoming
            .iter()
            .map(|&c| {
                let edge = &self[c];
                edge.weight() * self[edge.source()].output()
            })
            .sum::<f64>()
            + neuron.bias()
    }
    /// Ошибка, пришедшая по выходным связям: sum(вес * ошибка приемника)
    pub fn downstream_error(&self, id: NeuronId) -> f64 {
        self[id]
            .outgoing
            .iter()
            .map(|&c| {
                let edge = &self[c];
                edge.weight() * self[edge.target()].error()
            })
            .sum()
    }
    /// Градиентный шаг по всем входным связям нейрона и по его смещению
    pub fn update_incoming(&mut self, id: NeuronId, learning_rate: f64) {
        let delta = self[id].delta();
        for i in 0..self[id].incoming.len() {
            let c = self[id].incoming[i];
            let source_output = self[self[c].source()].output();
            let weight = self[c].weight();
            self[c].set_weight(weight - learning_rate * delta * source_output);
        }
        self[id].update_bias(learning_rate);
    }
    /// Удаление связи из хранилища и из списков обоих концов
    pub fn remove_connection(&mut self, id: ConnectionId) -> Option<Connection> {
        let connection = self.connections.get_mut(id.0)?.take()?;
        self.connection_count -= 1;
        if let Some(source) = self.neuron_mut(connection.source()) {
            source.outgoing.retain(|&c| c != id);
        }
        if let Some(target) = self.neuron_mut(connection.target()) {
            target.incoming.retain(|&c| c != id);
        }
        Some(connection)
    }
    /// Удаление нейрона вместе со всеми его входными и выходными связями
    pub fn remove_neuron(&mut self, id: NeuronId) -> Option<Neuron> {
        let incident: Vec<ConnectionId> = {
            let neuron = self.neuron(id)?;
            neuron.incoming.iter().chain(&neuron.outgoing).copied().collect()
        };
        for c in incident {
            self.remove_connection(c);
        }
        let neuron = self.neurons.get_mut(id.0)?.take()?;
        self.neuron_count -= 1;
        Some(neuron)
    }
}

impl Index<NeuronId> for Graph {
    type Output = Neuron;
    fn index(&self, id: NeuronId) -> &Neuron {
        match self.neuron(id) {
            Some(neuron) => neuron,
            None => panic!("neuron {id} is not in the graph"),
        }
    }
}

impl IndexMut<NeuronId> for Graph {
    fn index_mut(&mut self, id: NeuronId) -> &mut Neuron {
        match self.neuron_mut(id) {
            Some(neuron) => neuron,
            None => panic!("neuron {id} is not in the graph"),
        }
    }
}

impl Index<ConnectionId> for Graph {
    type Output = Connection;
    fn index(&self, id: ConnectionId) -> &Connection {
        match self.connection(id) {
            Some(connection) => connection,
            None => panic!("connection {id} is not in the graph"),
        }
    }
}

impl IndexMut<ConnectionId> for Graph {
    fn index_mut(&mut self, id: ConnectionId) -> &mut Connection {
        match self.connection_mut(id) {
            Some(connection) => connection,
            None => panic!("connection {id} is not in the graph"),
        }
    }
}
