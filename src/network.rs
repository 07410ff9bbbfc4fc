use crate::*;

/// Сеть прямого распространения.
/// Все нейроны и связи лежат в графе, слои хранят только номера нейронов.
/// Слои: входной, скрытые..., выходной.
#[derive(Clone, Debug)]
pub struct Network {
    /// Заданные размеры слоев (после прореживания фактические размеры
    /// смотреть в topology())
    dimension: Vec<usize>,
    /// Заданная топология (восстанавливается при reset)
    layer_topologies: Vec<LayerTopology>,
    layers: Vec<Layer>,
    graph: Graph,
    pruner: Pruner,
    strategies: PruningStrategies,
    /// Средняя абсолютная ошибка выхода по каждому обученному примеру
    output_errors: Vec<f64>,
    rng: ChaCha8Rng,
}

impl Network {
    /// Сеть со случайными весами (источник случайности - системный)
    pub fn new(dimension: &[usize], hidden: Activation, output: Activation) -> Self {
        Self::random(&mut rand::thread_rng(), dimension, hidden, output)
    }
    /// Создание сети со случайными весами и указанной топологией
    pub fn random(
        rng: &mut dyn RngCore,
        dimension: &[usize],
        hidden: Activation,
        output: Activation,
    ) -> Self {
        assert!(dimension.len() > 1);
        assert!(dimension.iter().all(|&n| n > 0));
        let layer_topologies = LayerTopology::from_dimension(dimension, hidden, output);
        let mut rng = ChaCha8Rng::seed_from_u64(rng.next_u64());
        let (graph, layers) = Self::build(&mut rng, &layer_topologies);
        Self {
            dimension: dimension.to_vec(),
            layer_topologies,
            layers,
            graph,
            pruner: Pruner::default(),
            strategies: PruningStrategies::none(),
            output_errors: Vec::new(),
            rng,
        }
    }
    pub fn with_pruner(mut self, pruner: Pruner) -> Self {
        self.pruner = pruner;
        self
    }
    pub fn with_strategies(mut self, strategies: PruningStrategies) -> Self {
        self.strategies = strategies;
        self
    }
    /// Нейроны по слоям + полные связи между соседними слоями,
    /// веса равномерно из [0, 0.5), смещения = -1
    fn build(rng: &mut ChaCha8Rng, layer_topologies: &[LayerTopology]) -> (Graph, Vec<Layer>) {
        let mut graph = Graph::new();
        let layers: Vec<Layer> = layer_topologies
            .iter()
            .map(|topology| Layer::populate(&mut graph, topology, DEFAULT_BIAS))
            .collect();
        for (from, to) in layers.iter().tuple_windows() {
            for &source in from.neurons() {
                for &target in to.neurons() {
                    graph.connect(source, target, rng.gen_range(0.0..0.5));
                }
            }
        }
        (graph, layers)
    }
    /// Новые случайные веса при той же заданной топологии.
    /// Прореживатель и включенные способы прореживания сохраняются.
    pub fn reset(&mut self) {
        let (graph, layers) = Self::build(&mut self.rng, &self.layer_topologies);
        self.graph = graph;
        self.layers = layers;
        self.output_errors.clear();
        debug!(connections = self.graph.connection_count(), "network reset");
    }
    /// Расчет в прямом направлении
    pub fn predict(&mut self, input: &[f64]) -> Vec<f64> {
        let input_layer = &self.layers[0];
        assert_eq!(input.len(), input_layer.len());
        //входы передаются без активации
        for (&id, &value) in input_layer.neurons().iter().zip(input) {
            self.graph[id].set_output(value);
        }
        for layer in &self.layers[1..] {
            layer.compute_outputs(&mut self.graph);
        }
        self.output_layer().outputs(&self.graph)
    }
    /// Обучение по одному примеру за шаг. Возвращает 1 - средняя абсолютная
    /// ошибка ПОСЛЕДНЕГО примера последней эпохи (не среднее по эпохе).
    /// Прореживание (если включено) - один раз в конце вызова,
    /// при epochs == 0 не запускается.
    pub fn train(
        &mut self,
        inputs: &[Vec<f64>],
        targets: &[Vec<f64>],
        learning_rate: f64,
        epochs: usize,
        shuffle: bool,
    ) -> f64 {
        assert_eq!(inputs.len(), targets.len());
        let mut order: Vec<usize> = (0..inputs.len()).collect();
        let mut last_error = 0.0;
        for epoch in 0..epochs {
            if shuffle {
                order.shuffle(&mut self.rng);
            }
            for &sample in &order {
                last_error = self.train_sample(&inputs[sample], &targets[sample], learning_rate);
            }
            debug!(epoch, last_error, "epoch finished");
        }
        if epochs > 0 && self.strategies.any() {
            self.prune();
        }
        1.0 - last_error
    }
    /// Один шаг: прямой проход, ошибки выходов, обратный проход, обновление весов.
    /// Возвращает среднюю абсолютную ошибку выхода до обновления.
    fn train_sample(&mut self, input: &[f64], target: &[f64], learning_rate: f64) -> f64 {
        let output = self.predict(input);
        let last = self.layers.len() - 1;

        //ошибка выходного слоя
        let mut sample_error = 0.0;
        for (&id, &expected) in self.layers[last].neurons().iter().zip_eq(target) {
            let neuron = &mut self.graph[id];
            sample_error += neuron.calc_error(expected).abs();
            neuron.calc_delta();
        }
        self.output_errors.push(sample_error / output.len() as f64);

        //обратный проход по скрытым слоям
        for layer in self.layers[1..last].iter().rev() {
            for &id in layer.neurons() {
                let error = self.graph.downstream_error(id);
                let neuron = &mut self.graph[id];
                neuron.reset_error();
                neuron.add_to_error(error);
                neuron.calc_delta();
            }
        }

        //веса: сначала выходной слой, потом скрытые по порядку
        self.layers[last].update_weights(&mut self.graph, learning_rate);
        for layer in &self.layers[1..last] {
            layer.update_weights(&mut self.graph, learning_rate);
        }

        mean_absolute_error(&output, target)
    }
    /// Запуск включенных способов прореживания (в порядке: нейроны,
    /// влияние веса, стабильность веса)
    pub fn prune(&mut self) -> PruneReport {
        let last = self.layers.len() - 1;
        let hidden = &mut self.layers[1..last];
        let before = self.graph.connection_count();
        let mut report = PruneReport::default();
        if self.strategies.activation_level {
            report += self.pruner.activation_pruning(&mut self.graph, hidden);
        }
        if self.strategies.weight_impact {
            report += self.pruner.weight_impact_pruning(&mut self.graph, hidden);
        }
        if self.strategies.weight_stability {
            report += self.pruner.weight_stability_pruning(&mut self.graph, hidden);
        }
        info!(
            ratio = self.pruner.ratio(),
            neurons_removed = report.neurons_removed,
            connections_removed = report.connections_removed,
            connections_before = before,
            connections_after = self.graph.connection_count(),
            "network pruned"
        );
        report
    }
    /// Средняя по примерам средняя абсолютная ошибка.
    /// Для пустого набора - 0.0 по соглашению: это не измеренная ошибка,
    /// и при усреднении результатов ее нельзя считать идеальной оценкой.
    pub fn measure_error_on_test_data(&mut self, inputs: &[Vec<f64>], targets: &[Vec<f64>]) -> f64 {
        if inputs.is_empty() {
            return 0.0;
        }
        let total: f64 = inputs
            .iter()
            .zip_eq(targets)
            .map(|(input, target)| {
                let predicted = self.predict(input);
                mean_absolute_error(&predicted, target)
            })
            .sum();
        total / inputs.len() as f64
    }
    pub fn connection_count(&self) -> usize {
        self.graph.connection_count()
    }
    pub fn dimension(&self) -> &[usize] {
        &self.dimension
    }
    /// Фактическая топология (после прореживания слои могут быть меньше)
    pub fn topology(&self) -> Vec<LayerTopology> {
        self.layers.iter().map(Layer::topology).collect()
    }
    pub fn input_layer(&self) -> &Layer {
        &self.layers[0]
    }
    pub fn hidden_layers(&self) -> &[Layer] {
        &self.layers[1..self.layers.len() - 1]
    }
    pub fn output_layer(&self) -> &Layer {
        &self.layers[self.layers.len() - 1]
    }
    pub fn graph(&self) -> &Graph {
        &self.graph
    }
    pub fn output_errors(&self) -> &[f64] {
        &self.output_errors
    }
    pub fn pruner(&self) -> &Pruner {
        &self.pruner
    }
    /// При ошибке прежняя доля сохраняется
    pub fn set_pruning_ratio(&mut self, ratio: f64) -> Result<(), ParameterError> {
        self.pruner.set_ratio(ratio)
    }
    pub fn strategies(&self) -> PruningStrategies {
        self.strategies
    }
    pub fn set_strategies(&mut self, strategies: PruningStrategies) {
        self.strategies = strategies;
    }
    /// Веса всех живых связей: (вес, источник, приемник)
    pub fn weights(&self) -> impl Iterator<Item = (f64, NeuronId, NeuronId)> + '_ {
        self.graph
            .connections()
            .map(|(_, c)| (c.weight(), c.source(), c.target()))
    }
}

/// Средняя абсолютная разность векторов
pub fn mean_absolute_error(output: &[f64], target: &[f64]) -> f64 {
    let total: f64 = output
        .iter()
        .zip_eq(target)
        .map(|(o, t)| (o - t).abs())
        .sum();
    total / output.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::from_seed(Default::default())
    }

    /// {x, x/2}, x равномерно из [0, 1)
    fn halves(rng: &mut ChaCha8Rng, n: usize) -> (Vec<Vec<f64>>, Vec<Vec<f64>>) {
        (0..n)
            .map(|_| {
                let x: f64 = rng.gen_range(0.0..1.0);
                (vec![x], vec![x / 2.0])
            })
            .unzip()
    }

    #[test]
    fn random() {
        let net = Network::random(&mut rng(), &[3, 4, 5, 2], Activation::LeakyRelu, Activation::Sigmoid);
        assert_eq!(net.dimension(), &[3usize, 4, 5, 2]);
        assert_eq!(net.input_layer().len(), 3);
        assert_eq!(net.hidden_layers().len(), 2);
        assert_eq!(net.output_layer().len(), 2);
        assert_eq!(net.hidden_layers()[0].activation(), Activation::LeakyRelu);
        assert_eq!(net.output_layer().activation(), Activation::Sigmoid);
        //3*4 + 4*5 + 5*2
        assert_eq!(net.connection_count(), 42);
        for (w, _, _) in net.weights() {
            assert!((0.0..0.5).contains(&w));
        }
        for layer in net.topology() {
            assert!(layer.neurons > 0);
        }
        for layer in net.hidden_layers().iter().chain([net.output_layer()]) {
            for &id in layer.neurons() {
                assert_relative_eq!(net.graph()[id].bias(), -1.0);
            }
        }
        assert_eq!(net.pruner().ratio(), 0.2);
        assert_eq!(net.strategies(), PruningStrategies::none());
    }

    #[test]
    fn connection_count() {
        let net = Network::random(&mut rng(), &[1, 10, 10, 10, 1], Activation::Sigmoid, Activation::Sigmoid);
        assert_eq!(net.connection_count(), 10 + 100 + 100 + 10);
        //без скрытых слоев вход соединен прямо с выходом
        let net = Network::random(&mut rng(), &[4, 3], Activation::Sigmoid, Activation::Sigmoid);
        assert_eq!(net.connection_count(), 12);
        assert!(net.hidden_layers().is_empty());
    }

    #[test]
    #[should_panic]
    fn single_layer() {
        Network::random(&mut rng(), &[4], Activation::Sigmoid, Activation::Sigmoid);
    }

    #[test]
    fn predict() {
        let mut net = Network::random(&mut rng(), &[2, 3, 1], Activation::Sigmoid, Activation::Sigmoid);
        let actual = net.predict(&[0.5, 0.7]);

        //расчет вручную по весам из графа
        let g = net.graph();
        let hidden: Vec<f64> = net.hidden_layers()[0]
            .neurons()
            .iter()
            .map(|&id| {
                let n = &g[id];
                let inputs = [0.5, 0.7];
                let net_input: f64 = n
                    .incoming()
                    .iter()
                    .map(|&c| {
                        let source = g[c].source();
                        let i = net.input_layer().neurons().iter().position(|&s| s == source).unwrap();
                        g[c].weight() * inputs[i]
                    })
                    .sum::<f64>()
                    + n.bias();
                Activation::Sigmoid.phi(net_input)
            })
            .collect();
        let out_id = net.output_layer().neurons()[0];
        let out = &g[out_id];
        let net_input: f64 = out
            .incoming()
            .iter()
            .map(|&c| {
                let source = g[c].source();
                let i = net.hidden_layers()[0].neurons().iter().position(|&s| s == source).unwrap();
                g[c].weight() * hidden[i]
            })
            .sum::<f64>()
            + out.bias();
        let expected = Activation::Sigmoid.phi(net_input);

        assert_eq!(actual.len(), 1);
        assert_relative_eq!(actual[0], expected, epsilon = 1e-12);
    }

    #[test]
    fn predict_is_deterministic() {
        let mut net = Network::random(&mut rng(), &[3, 6, 4, 2], Activation::LeakyRelu, Activation::Sigmoid);
        let first = net.predict(&[0.1, -0.4, 0.9]);
        for _ in 0..10 {
            let again = net.predict(&[0.1, -0.4, 0.9]);
            assert_eq!(
                first.iter().map(|x| x.to_bits()).collect::<Vec<_>>(),
                again.iter().map(|x| x.to_bits()).collect::<Vec<_>>()
            );
        }
    }

    #[test]
    fn same_seed_same_network() {
        let mut a = Network::random(&mut rng(), &[2, 5, 1], Activation::Sigmoid, Activation::Sigmoid);
        let mut b = Network::random(&mut rng(), &[2, 5, 1], Activation::Sigmoid, Activation::Sigmoid);
        assert!(a.weights().zip_eq(b.weights()).all(|(x, y)| x == y));
        assert_eq!(a.predict(&[0.3, 0.6]), b.predict(&[0.3, 0.6]));
    }

    #[test]
    #[should_panic]
    fn predict_wrong_input_len() {
        let mut net = Network::random(&mut rng(), &[2, 3, 1], Activation::Sigmoid, Activation::Sigmoid);
        net.predict(&[0.5]);
    }

    #[test]
    fn train_reduces_error() {
        let mut rng = rng();
        let mut net = Network::random(&mut rng, &[1, 10, 10, 10, 1], Activation::Sigmoid, Activation::Sigmoid);
        let (inputs, targets) = halves(&mut rng, 10000);
        let (test_inputs, test_targets) = halves(&mut rng, 500);

        let before = net.measure_error_on_test_data(&test_inputs, &test_targets);
        let accuracy = net.train(&inputs, &targets, 0.05, 1, true);
        let after = net.measure_error_on_test_data(&test_inputs, &test_targets);

        assert!(after < before, "error before {before}, after {after}");
        assert!(accuracy <= 1.0);
        assert_eq!(net.output_errors().len(), 10000);
        //без прореживания топология не меняется
        assert_eq!(net.connection_count(), 220);
    }

    #[test]
    fn train_returns_last_sample_accuracy() {
        let mut net = Network::random(&mut rng(), &[2, 4, 3, 2], Activation::Sigmoid, Activation::Sigmoid);
        let inputs = vec![vec![0.1, 0.2], vec![0.8, 0.4], vec![0.5, 0.9]];
        let targets = vec![vec![0.0, 1.0], vec![1.0, 0.0], vec![0.3, 0.6]];
        let accuracy = net.train(&inputs, &targets, 0.1, 3, false);
        //без перемешивания последний пример - последний в наборе,
        //его ошибка посчитана до обновления весов
        let errors = net.output_errors();
        assert_eq!(errors.len(), 9);
        assert_relative_eq!(accuracy, 1.0 - errors[8], epsilon = 1e-12);
        //а не среднее по эпохе
        let epoch_mean = errors[6..].iter().sum::<f64>() / 3.0;
        assert!((accuracy - (1.0 - epoch_mean)).abs() > 1e-9);
    }

    #[test]
    fn train_empty() {
        let mut net = Network::random(&mut rng(), &[2, 3, 1], Activation::Sigmoid, Activation::Sigmoid);
        assert_eq!(net.train(&[], &[], 0.1, 2, true), 1.0);
        assert!(net.output_errors().is_empty());
        assert_eq!(net.measure_error_on_test_data(&[], &[]), 0.0);
    }

    #[test]
    fn zero_epochs_do_not_prune() {
        let mut net = Network::random(&mut rng(), &[1, 10, 10, 10, 1], Activation::Sigmoid, Activation::Sigmoid)
            .with_strategies(PruningStrategies { weight_impact: true, ..Default::default() });
        let before = net.connection_count();
        let accuracy = net.train(&[vec![0.3]], &[vec![0.15]], 0.05, 0, false);
        assert_eq!(net.connection_count(), before);
        assert_eq!(accuracy, 1.0);
        assert!(net.output_errors().is_empty());
        //одна эпоха - прореживание срабатывает
        net.train(&[vec![0.3]], &[vec![0.15]], 0.05, 1, false);
        assert!(net.connection_count() < before);
    }

    #[test]
    fn fresh_network_stability_pruning() {
        //без обучения нестабильность не определена ни у одной связи:
        //удаляются первые по порядку выходные связи
        let mut net = Network::random(&mut rng(), &[1, 10, 10, 10, 1], Activation::Sigmoid, Activation::Sigmoid)
            .with_strategies(PruningStrategies { weight_stability: true, ..Default::default() });
        let first: Vec<ConnectionId> = net.hidden_layers()[..2]
            .iter()
            .flat_map(|layer| layer.neurons().iter())
            .map(|&id| net.graph()[id].outgoing()[0])
            .collect();
        let report = net.prune();
        assert_eq!(report.connections_removed, 20);
        assert_eq!(net.connection_count(), 200);
        for c in first {
            assert!(net.graph().connection(c).is_none());
        }
    }

    #[test]
    fn train_updates_weight_history() {
        let mut net = Network::random(&mut rng(), &[1, 3, 1], Activation::Sigmoid, Activation::Sigmoid);
        net.train(&[vec![0.5], vec![0.2]], &[vec![0.25], vec![0.1]], 0.05, 2, false);
        for (_, c) in net.graph().connections() {
            assert_eq!(c.update_count(), 4);
            assert!(c.instability().is_some());
        }
    }

    #[test]
    fn measure_error() {
        let mut net = Network::random(&mut rng(), &[2, 3, 2], Activation::Sigmoid, Activation::Sigmoid);
        let inputs = vec![vec![0.1, 0.2], vec![0.4, 0.3]];
        let targets = vec![vec![0.0, 1.0], vec![1.0, 0.5]];
        let p0 = net.predict(&inputs[0]);
        let p1 = net.predict(&inputs[1]);
        let expected = (mean_absolute_error(&p0, &targets[0]) + mean_absolute_error(&p1, &targets[1])) / 2.0;
        assert_relative_eq!(net.measure_error_on_test_data(&inputs, &targets), expected, epsilon = 1e-12);
    }

    #[test]
    fn mean_absolute_error_values() {
        assert_relative_eq!(mean_absolute_error(&[0.5, 1.0], &[0.0, 0.5]), 0.5);
        assert_relative_eq!(mean_absolute_error(&[0.2], &[0.7]), 0.5);
    }

    #[test]
    fn reset() {
        let mut net = Network::random(&mut rng(), &[1, 10, 10, 10, 1], Activation::Sigmoid, Activation::Sigmoid)
            .with_pruner(Pruner::new(0.5).unwrap())
            .with_strategies(PruningStrategies { weight_impact: true, ..Default::default() });
        net.train(&[vec![0.3]], &[vec![0.15]], 0.05, 1, false);
        assert!(net.connection_count() < 220);
        let old: Vec<f64> = net.weights().map(|(w, _, _)| w).collect();

        net.reset();
        assert_eq!(net.connection_count(), 220);
        assert!(net.output_errors().is_empty());
        assert_eq!(net.pruner().ratio(), 0.5);
        assert!(net.strategies().weight_impact);
        let new: Vec<f64> = net.weights().map(|(w, _, _)| w).collect();
        assert_ne!(old, new);
    }

    #[test]
    fn pruning_ratio() {
        let mut net = Network::random(&mut rng(), &[1, 10, 10, 1], Activation::Sigmoid, Activation::Sigmoid);
        assert!(net.set_pruning_ratio(1.0).is_err());
        assert_eq!(net.pruner().ratio(), 0.2);
        assert!(net.set_pruning_ratio(1.5).is_err());
        assert_eq!(net.pruner().ratio(), 0.2);
        assert!(net.set_pruning_ratio(0.3).is_ok());
        assert_eq!(net.pruner().ratio(), 0.3);
    }

    fn pruned(strategies: PruningStrategies, ratio: f64) -> (usize, usize, Network) {
        let mut rng = rng();
        let mut net = Network::random(&mut rng, &[1, 10, 10, 10, 1], Activation::Sigmoid, Activation::Sigmoid)
            .with_pruner(Pruner::new(ratio).unwrap())
            .with_strategies(strategies);
        let (inputs, targets) = halves(&mut rng, 200);
        let before = net.connection_count();
        net.train(&inputs, &targets, 0.05, 1, true);
        let after = net.connection_count();
        (before, after, net)
    }

    #[test]
    fn activation_level_pruning() {
        let strategies = PruningStrategies { activation_level: true, ..Default::default() };
        let (before, after, net) = pruned(strategies, 0.2);
        //по нейрону из первого и второго скрытых слоев:
        //(1 вх. + 10 вых.) + (9 вх. + 10 вых.)
        assert_eq!(before - after, 30);
        let sizes: Vec<usize> = net.topology().iter().map(|l| l.neurons).collect();
        assert_eq!(sizes, vec![1, 9, 9, 10, 1]);
        //заданная топология не меняется
        assert_eq!(net.dimension(), &[1usize, 10, 10, 10, 1]);
    }

    #[test]
    fn weight_stability_pruning() {
        let strategies = PruningStrategies { weight_stability: true, ..Default::default() };
        let (before, after, net) = pruned(strategies, 0.2);
        //по одной выходной связи у каждого нейрона двух первых скрытых слоев
        assert_eq!(before - after, 20);
        assert_eq!(net.topology().iter().map(|l| l.neurons).sum::<usize>(), 32);
    }

    #[test]
    fn weight_impact_pruning() {
        let strategies = PruningStrategies { weight_impact: true, ..Default::default() };
        let (before, after, _) = pruned(strategies, 0.5);
        //floor(10 * 0.5) - 1 = 4 связи у 20 нейронов
        assert_eq!(before - after, 80);
    }

    #[test]
    fn pruning_never_adds_connections() {
        for ratio in [0.0, 0.05, 0.1, 0.2, 0.3, 0.5, 0.9] {
            let strategies = PruningStrategies {
                activation_level: true,
                weight_stability: true,
                weight_impact: true,
            };
            let (before, after, mut net) = pruned(strategies, ratio);
            assert!(after <= before);
            if ratio >= 0.2 {
                assert!(after < before);
            }
            //после прореживания сеть продолжает работать
            let out = net.predict(&[0.5]);
            assert!(out[0].is_finite());
            //каждая связь ссылается на живые нейроны
            for (_, c) in net.graph().connections() {
                assert!(net.graph().neuron(c.source()).is_some());
                assert!(net.graph().neuron(c.target()).is_some());
            }
        }
    }

    #[test]
    fn prune_without_strategies() {
        let mut net = Network::random(&mut rng(), &[1, 10, 10, 1], Activation::Sigmoid, Activation::Sigmoid);
        assert_eq!(net.prune(), PruneReport::default());
        assert_eq!(net.connection_count(), 120);
        net.set_strategies(PruningStrategies { weight_impact: true, ..Default::default() });
        let report = net.prune();
        assert_eq!(report.connections_removed, 10);
        assert_eq!(net.connection_count(), 110);
    }

    #[test]
    fn leaky_relu_network() {
        let mut rng = rng();
        let mut net = Network::random(&mut rng, &[2, 8, 8, 1], Activation::LeakyRelu, Activation::Sigmoid)
            .with_strategies(PruningStrategies { activation_level: true, ..Default::default() })
            .with_pruner(Pruner::new(0.4).unwrap());
        let inputs: Vec<Vec<f64>> = (0..50).map(|_| vec![rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)]).collect();
        let targets: Vec<Vec<f64>> = inputs.iter().map(|x| vec![if x[0] > x[1] { 1.0 } else { 0.0 }]).collect();
        let accuracy = net.train(&inputs, &targets, 0.01, 2, true);
        assert!(accuracy.is_finite());
        //floor(8 * 0.4) - 1 = 2 нейрона из первого скрытого слоя
        assert_eq!(net.hidden_layers()[0].len(), 6);
        assert_eq!(net.hidden_layers()[1].len(), 8);
        //выходы скрытых LeakyRelu-нейронов учитываются только как неактивные
        for &id in net.hidden_layers()[1].neurons() {
            assert_eq!(net.graph()[id].activation_fired_count(), 0);
        }
        for &id in net.output_layer().neurons() {
            assert_eq!(net.graph()[id].activation_fired_count(), 100);
        }
    }

    #[test]
    fn network_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<Network>();
    }
}
