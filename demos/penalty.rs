// examples/penalty.rs
// Run with:
//   RUST_LOG=info cargo run --example penalty

use penalty_goalie::goalie::arena::{Arena, Outcome, Scripted, run_trials};
use penalty_goalie::{Goalie, GoalieConfig, Strategy};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let arena = Arena::default();
    let mut goalie = Goalie::new(arena.field(), GoalieConfig::guessing(true, 2), 7)?;

    let geo = goalie.geometry();
    println!("== Geometry ==");
    println!("critical points: {:?}", geo.critical_points());
    println!("inflection:      {:?}", geo.inflection());

    // A player who always jinks up at the edge of the critical zone and cuts
    // back down halfway through it.
    let first = geo.inflection().first;
    let mut player = Scripted::UpThenDown { from_x: first, turn_x: first + 8.0 * arena.ball_speed };

    for block in 0..4 {
        let records = run_trials(&mut goalie, &arena, &mut player, 10, 2_000)?;
        let blocked = records.iter().filter(|r| r.outcome == Outcome::Blocked).count();
        println!("== Block {block} ==");
        println!("blocked {blocked}/10");
        for s in Strategy::ALL {
            println!("  {s:>5}: {:.2}", goalie.weights().probability(s));
        }
    }
    Ok(())
}
