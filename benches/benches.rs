//! benches.rs
use cplot::{cmath, parse, Builder, Variables};
use criterion::{criterion_group, criterion_main, Criterion};
use num_complex::Complex;
use paste::paste;

fn bench_parse_linear(c: &mut Criterion) {
    let make_much_operand = |n: usize| (0..=n).map(|_| "z").collect::<Vec<_>>().join("+");
    for n in [1, 10, 100, 500] {
        let formula = make_much_operand(n);
        c.bench_function(&format!("parse {} operands", n), |b| {
            b.iter(|| { let _ = parse(&formula); })
        });

        let mut evaluator = Builder::new(&formula).build().unwrap();
        let z = Complex::new(1.0, 0.0);
        c.bench_function(&format!("eval {} operands", n), |b| {
            b.iter(|| evaluator.eval_at(z))
        });
    }
}

fn bench_parse_nested(c: &mut Criterion) {
    let make_much_nested = |n: usize| {
        let mut formula = "z".to_string();
        for _ in 0..n {
            formula = format!("sin({})", formula);
        }
        formula
    };
    for n in [1, 10, 100] {
        let formula = make_much_nested(n);
        c.bench_function(&format!("parse {} nested", n), |b| {
            b.iter(|| { let _ = parse(&formula); })
        });

        let mut evaluator = Builder::new(&formula).build().unwrap();
        let z = Complex::new(1.0, 0.0);
        c.bench_function(&format!("eval {} nested", n), |b| {
            b.iter(|| evaluator.eval_at(z))
        });
    }
}

fn bench_parse_literal(c: &mut Criterion) {
    for formula in ["7", "3.14159265358979", "6.02214076e23", "1.602176634E-19"] {
        c.bench_function(&format!("parse literal '{}'", formula), |b| {
            b.iter(|| { let _ = parse(formula); })
        });
    }
}

fn bench_parse_invalid(c: &mut Criterion) {
    let invalid_formulas = [
        "1 + (2 * 3",           // unbalanced
        "z ** 2",               // adjacent operators
        "2z",                   // implicit multiplication
        "1 + @",                // unsupported character
        "sin()",                // empty parentheses
    ];

    for formula in &invalid_formulas {
        c.bench_function(&format!("parse invalid: {}", formula), |b| {
            b.iter(|| { let _ = parse(formula); })
        });
    }
}

criterion_group!(bench_parse,
    bench_parse_linear,
    bench_parse_nested,
    bench_parse_literal,
    bench_parse_invalid,
);

fn bench_practical_polynomial(c: &mut Criterion) {
    let vars = Variables::from(&[
        ("a0", Complex::new(1.0, 2.0)),
        ("a1", Complex::new(-2.0, 3.5)),
        ("a2", Complex::new(5.25, -0.22)),
        ("a3", Complex::new(-0.03, 4.03)),
    ]).unwrap();

    let formula = "a0 + a1*z + a2*(z^2) + a3*(z^3)";
    let mut evaluator = Builder::new(formula).with_variables(vars).build().unwrap();
    let z = Complex::new(0.05, 2.4);
    c.bench_function(&format!("eval polynomial '{}'", formula), |b| {
        b.iter(|| evaluator.eval_at(z))
    });
}

fn bench_practical_rational(c: &mut Criterion) {
    let formula = "(z - 1)/(z*z + 1) + sin(z)/z";
    let mut evaluator = Builder::new(formula).build().unwrap();
    let z = Complex::new(0.3, -1.2);
    c.bench_function(&format!("eval rational '{}'", formula), |b| {
        b.iter(|| evaluator.eval_at(z))
    });
}

/// A 256x256 raster over `[-2, 2] x [-2, 2]`.
fn raster() -> Vec<Complex<f64>> {
    let n = 256;
    let step = 4.0 / n as f64;
    (0..n)
        .flat_map(|row| (0..n).map(move |col| {
            Complex::new(-2.0 + col as f64 * step, 2.0 - row as f64 * step)
        }))
        .collect()
}

fn bench_practical_sweep(c: &mut Criterion) {
    let formula = "exp(1/z) * tan(z)";
    let points = raster();

    let mut evaluator = Builder::new(formula).build().unwrap();
    c.bench_function("sweep sequential 256x256", |b| {
        b.iter(|| points.iter().map(|z| evaluator.eval_at(*z)).collect::<Vec<_>>())
    });

    let evaluator = Builder::new(formula).build().unwrap();
    c.bench_function("sweep parallel 256x256", |b| {
        b.iter(|| evaluator.eval_many(&points))
    });
}

criterion_group!(bench_practical,
    bench_practical_polynomial,
    bench_practical_rational,
    bench_practical_sweep,
);

macro_rules! compares_builtin_functions {
    ($( $variant: ident ),* $(,)? ) => {
        paste! {
            $(
                pub fn [<bench_compares_ $variant>](c: &mut Criterion) {
                    let z = Complex::new(1.0, 0.5);

                    c.bench_function(concat!("direct cmath::", stringify!($variant), "(z)"), |b| {
                        b.iter(|| cmath::$variant(z))
                    });

                    let mut evaluator = Builder::new(concat!(stringify!($variant), "(z)")).build().unwrap();
                    c.bench_function(concat!("parsed \"", stringify!($variant), "(z)\""), |b| {
                        b.iter(|| evaluator.eval_at(z))
                    });
                }
            )*
        }
    };
}

compares_builtin_functions! {
    sin,    cos,    tan,
    exp,    log,    sqrt,
    abs,    arg,    conj,
}

pub fn bench_compares_pow(c: &mut Criterion) {
    let z = Complex::new(1.0, 0.5);
    let w = Complex::new(2.0, -0.5);

    c.bench_function("direct cmath::pow(z, w)", |b| {
        b.iter(|| cmath::pow(z, w))
    });

    let vars = Variables::from(&[("w", w)]).unwrap();
    let mut evaluator = Builder::new("z^w").with_variables(vars).build().unwrap();
    c.bench_function(r#"parsed "z^w""#, |b| {
        b.iter(|| evaluator.eval_at(z))
    });
}

criterion_group!(bench_compare,
    bench_compares_sin,     bench_compares_cos,     bench_compares_tan,
    bench_compares_exp,     bench_compares_log,     bench_compares_sqrt,
    bench_compares_abs,     bench_compares_arg,     bench_compares_conj,

    bench_compares_pow,
);

criterion_main!{
    bench_parse,
    bench_practical,
    bench_compare,
}
