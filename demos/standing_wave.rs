use em_waves::grid::linspace;
use em_waves::line::LoadedLine;
use em_waves::math::CScalar;
use em_waves::reflection::vswr;

fn main() {
    // Standing wave on a lossy 50 Ω line terminated in 100 + 40j Ω.
    let line = LoadedLine::new(50.0, 1.0, 0.5);
    let z_load = CScalar::new(100.0, 40.0);
    let positions = linspace(0.0, 2.0, 1000);

    let total = line.voltage_profile(z_load, &positions);
    let reflected = line.reflected_profile(z_load, &positions);

    let gamma = line.reflection(z_load);
    eprintln!("|Gamma| = {:.4}, VSWR = {:.4}", gamma.norm(), vswr(gamma));

    println!("x_m, v_total, v_reflected_re");
    for ((x, v), r) in positions.iter().zip(&total).zip(&reflected) {
        println!("{x:.6e}, {v:.6e}, {r:.6e}");
    }
}
