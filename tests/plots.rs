use pinsim::mixing::{simulate_average, simulate_mixture, Populations};
use pinsim::{plot, sweep, Histogram, Sampler, Strategy};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn sweep_plot_is_written_to_the_given_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("sweep.svg");
    let mut rng = ChaCha8Rng::seed_from_u64(12);
    let sampler = Sampler::new("12".parse().unwrap(), Strategy::WithRepetition);
    let points = sweep(&sampler, &[5, 10, 20], &mut rng).unwrap();

    plot::save(&plot::error_bars_svg(&points, "Attempts"), &path).unwrap();

    let svg = std::fs::read_to_string(&path).unwrap();
    assert_eq!(svg.matches("<circle").count(), 3);
}

#[test]
fn mixture_histogram_is_bimodal() {
    let mut rng = ChaCha8Rng::seed_from_u64(2023);
    let pops = Populations::default();
    let z = simulate_mixture(10_000, 0.5, &pops, &mut rng).unwrap();
    let hist = Histogram::new(z.view(), 50).unwrap();
    assert_eq!(hist.total(), 10_000);

    let centre = hist
        .edges
        .windows(2)
        .zip(&hist.counts)
        .filter(|(edge, _)| edge[0] > 170.0 && edge[1] < 230.0)
        .map(|(_, &count)| count)
        .sum::<u64>();
    assert!(centre < 20, "{centre} samples between the two peaks");
}

#[test]
fn average_histogram_is_unimodal_and_saved() {
    let dir = tempfile::tempdir().unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let u = simulate_average(10_000, &Populations::default(), &mut rng);
    let hist = Histogram::new(u.view(), 50).unwrap();
    assert_eq!(hist.total(), 10_000);

    let peak = hist
        .counts
        .iter()
        .enumerate()
        .max_by_key(|(_, &c)| c)
        .map(|(i, _)| (hist.edges[i] + hist.edges[i + 1]) / 2.0)
        .unwrap();
    assert!((peak - 200.0).abs() < 10.0, "peak at {peak}");

    let path = dir.path().join("average.svg");
    plot::save(&plot::histogram_svg(&hist, "Histogram of U"), &path).unwrap();
    assert!(std::fs::read_to_string(path).unwrap().contains("Histogram of U"));
}
