use parsnip::linalg::Vector;
use parsnip::parsers::*;
use parsnip::prelude::*;

#[derive(Debug)]
struct Sensor {
    position: Vector<2>,
    beacon: Vector<2>,
}

impl Sensor {
    fn range(&self) -> f64 {
        let d = self.beacon + self.position * -1.0;
        d[0].abs() + d[1].abs()
    }

    fn parser() -> impl Parser<Expression = Self> {
        string("Sensor at ")
            .preceding(Self::point())
            .then(string(": closest beacon is at ").preceding(Self::point()))
            .map(|(position, beacon)| Self { position, beacon })
    }

    fn point() -> impl Parser<Expression = Vector<2>> {
        string("x=")
            .then(int())
            .then(string(", y="))
            .then(int())
            .map(|unwind!(_, x, _, y)| Vector::new([x as f64, y as f64]))
    }
}

fn main() {
    let input = "\
Sensor at x=2, y=18: closest beacon is at x=-2, y=15
Sensor at x=9, y=16: closest beacon is at x=10, y=16
Sensor at x=13, y=2: closest beacon is at x=15, y=3
";

    let sensors = match lines(Sensor::parser()).run(input) {
        Ok((sensors, "")) => sensors,
        Ok((_, rest)) => {
            eprintln!("Unexpected input: {rest:?}");
            return;
        }
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };

    for sensor in &sensors {
        println!(
            "sensor at {:?} covers a range of {}",
            sensor.position.components(),
            sensor.range()
        );
    }
}
