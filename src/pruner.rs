use crate::*;

/// Доля прореживания по умолчанию
pub const DEFAULT_PRUNING_RATIO: f64 = 0.2;

/// Какие способы прореживания включены (запускаются после каждого вызова train)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PruningStrategies {
    /// Удаление нейронов по статистике использования
    pub activation_level: bool,
    /// Удаление связей с самым нестабильным весом
    pub weight_stability: bool,
    /// Удаление связей с наименьшим по модулю весом
    pub weight_impact: bool,
}

impl PruningStrategies {
    pub fn none() -> Self {
        Self::default()
    }
    pub fn any(&self) -> bool {
        self.activation_level || self.weight_stability || self.weight_impact
    }
}

/// Итог прореживания
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PruneReport {
    pub neurons_removed: usize,
    pub connections_removed: usize,
}

impl std::ops::AddAssign for PruneReport {
    fn add_assign(&mut self, other: Self) {
        self.neurons_removed += other.neurons_removed;
        self.connections_removed += other.connections_removed;
    }
}

/// Прореживание скрытых слоев. Последний скрытый слой не трогается никогда.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pruner {
    ratio: f64,
}

impl Default for Pruner {
    fn default() -> Self {
        Self {
            ratio: DEFAULT_PRUNING_RATIO,
        }
    }
}

impl Pruner {
    /// Конструктор
    pub fn new(ratio: f64) -> Result<Self, ParameterError> {
        let mut pruner = Self::default();
        pruner.set_ratio(ratio)?;
        Ok(pruner)
    }
    pub fn ratio(&self) -> f64 {
        self.ratio
    }
    /// При ошибке прежнее значение сохраняется
    pub fn set_ratio(&mut self, ratio: f64) -> Result<(), ParameterError> {
        if !(0.0..1.0).contains(&ratio) {
            return Err(ParameterError::InvalidRatio(ratio));
        }
        self.ratio = ratio;
        Ok(())
    }
    /// Сколько удалить из n элементов: floor(n * ratio) - 1, но не меньше 0
    pub fn removal_count(&self, n: usize) -> usize {
        let count = (n as f64 * self.ratio).floor() as i64 - 1;
        count.max(0) as usize
    }
    /// Удаление нейронов (вместе со всеми их связями).
    /// Нейроны сортируются по убыванию счетчика использования,
    /// удаляются первые removal_count.
    pub fn activation_pruning(&self, graph: &mut Graph, hidden_layers: &mut [Layer]) -> PruneReport {
        let mut report = PruneReport::default();
        for (l, layer) in eligible_mut(hidden_layers).iter_mut().enumerate() {
            let count = self.removal_count(layer.len());
            if count == 0 {
                continue;
            }
            //по убыванию, стабильная сортировка
            let victims: Vec<NeuronId> = layer
                .neurons()
                .iter()
                .copied()
                .sorted_by(|&a, &b| graph[b].usage().cmp(&graph[a].usage()))
                .take(count)
                .collect();
            let before = graph.connection_count();
            for &id in &victims {
                graph.remove_neuron(id);
            }
            layer.retain(|id| !victims.contains(id));
            let connections_removed = before - graph.connection_count();
            debug!(layer = l, neurons_removed = victims.len(), connections_removed, "activation pruning");
            report += PruneReport {
                neurons_removed: victims.len(),
                connections_removed,
            };
        }
        report
    }
    /// Удаление выходных связей с наибольшей нестабильностью веса.
    /// Связи без обновлений (нестабильность не определена) идут последними.
    pub fn weight_stability_pruning(&self, graph: &mut Graph, hidden_layers: &[Layer]) -> PruneReport {
        let victims = self.select_outgoing(graph, hidden_layers, |graph, a, b| {
            match (graph[a].instability(), graph[b].instability()) {
                (Some(x), Some(y)) => y.total_cmp(&x),
                (Some(_), None) => std::cmp::Ordering::Less,
                (None, Some(_)) => std::cmp::Ordering::Greater,
                (None, None) => std::cmp::Ordering::Equal,
            }
        });
        Self::remove_connections(graph, victims, "weight stability pruning")
    }
    /// Удаление выходных связей с наименьшим по модулю весом
    pub fn weight_impact_pruning(&self, graph: &mut Graph, hidden_layers: &[Layer]) -> PruneReport {
        let victims = self.select_outgoing(graph, hidden_layers, |graph, a, b| {
            graph[a].weight().abs().total_cmp(&graph[b].weight().abs())
        });
        Self::remove_connections(graph, victims, "weight impact pruning")
    }
    /// Для каждого нейрона подходящих слоев: сортировка выходных связей и
    /// первые removal_count из них
    fn select_outgoing<F>(&self, graph: &Graph, hidden_layers: &[Layer], order: F) -> Vec<ConnectionId>
    where
        F: Fn(&Graph, ConnectionId, ConnectionId) -> std::cmp::Ordering,
    {
        eligible(hidden_layers)
            .iter()
            .flat_map(|layer| layer.neurons().iter())
            .flat_map(|&id| {
                let outgoing = graph[id].outgoing();
                outgoing
                    .iter()
                    .copied()
                    .sorted_by(|&a, &b| order(graph, a, b))
                    .take(self.removal_count(outgoing.len()))
            })
            .collect()
    }
    /// Удаление всех выбранных связей за один шаг
    fn remove_connections(graph: &mut Graph, victims: Vec<ConnectionId>, strategy: &str) -> PruneReport {
        let connections_removed = victims
            .into_iter()
            .filter(|&c| graph.remove_connection(c).is_some())
            .count();
        debug!(connections_removed, strategy, "connections pruned");
        PruneReport {
            neurons_removed: 0,
            connections_removed,
        }
    }
}

/// Скрытые слои, кроме последнего
fn eligible(hidden_layers: &[Layer]) -> &[Layer] {
    &hidden_layers[..hidden_layers.len().saturating_sub(1)]
}

fn eligible_mut(hidden_layers: &mut [Layer]) -> &mut [Layer] {
    let len = hidden_layers.len().saturating_sub(1);
    &mut hidden_layers[..len]
}
