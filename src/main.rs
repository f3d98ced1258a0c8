use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::process::ExitCode;
use std::time::Duration;

use strassen_kernels::bench::{flush_cache, timed};
use strassen_kernels::compare::{identity, matrices_equal, max_abs_diff};
use strassen_kernels::io::{print_matrix, read_matrix, write_matrix};
use strassen_kernels::naive::multiply_naive;
use strassen_kernels::random::{random_invertible, random_matrix};
use strassen_kernels::{
    invert_lu, invert_strassen_using_naive, invert_strassen_using_strassen, multiply_strassen,
    MatrixError,
};

const DEFAULT_MAX_POWER: u32 = 5;
const TOLERANCE: f64 = 1e-3;

type Inverter = fn(&[f64], usize) -> strassen_kernels::Result<Vec<f64>>;

const INVERTERS: [(&str, Inverter); 3] = [
    ("lu_invert", invert_lu),
    ("strassen_invert_naive_matmat", invert_strassen_using_naive),
    ("strassen_invert_strassen_matmat", invert_strassen_using_strassen),
];

struct ResultRow {
    power: u32,
    durations_secs: Vec<f64>,
}

impl ResultRow {
    // failed checks are recorded as -1
    fn line(&self) -> String {
        let cols: Vec<String> = self.durations_secs.iter().map(|d| format!("{d:.6}")).collect();
        format!("{} {}", self.power, cols.join(" "))
    }
}

fn secs_if(passed: bool, duration: Duration) -> f64 {
    if passed {
        duration.as_secs_f64()
    } else {
        -1.0
    }
}

fn run_sweep(max_power: u32) -> Result<(), MatrixError> {
    let mut rng = rand::thread_rng();
    let mut matmat_rows = Vec::new();
    let mut matinv_rows = Vec::new();

    for power in 2..=max_power.max(2) {
        let n = 2usize.pow(power) - 1;
        let (m, k) = (n + 1, n - 1);
        println!("\n=== Size {power}: {m}x{n} times {n}x{k}, inverse of {n}x{n} ===");

        let a = random_matrix(m, n);
        let b = random_matrix(n, k);

        flush_cache();
        let (naive, naive_time) = timed("naive_matmat", || multiply_naive(&a, &b, m, n, k));
        let naive = naive?;
        flush_cache();
        let (strassen, strassen_time) =
            timed("strassen_matmat", || multiply_strassen(&a, &b, m, n, k));
        let strassen = strassen?;

        let agree = matrices_equal(&strassen, &naive, m, k, TOLERANCE);
        if !agree {
            eprintln!("strassen_matmat: wrong result for {m}x{n}x{k}");
        }
        matmat_rows.push(ResultRow {
            power,
            durations_secs: vec![naive_time.as_secs_f64(), secs_if(agree, strassen_time)],
        });

        let a = random_invertible(n, &mut rng);
        let id = identity(n);
        let mut durations_secs = Vec::with_capacity(INVERTERS.len());
        for (label, invert) in INVERTERS {
            flush_cache();
            let (inverse, elapsed) = timed(label, || invert(&a, n));
            let inverse = inverse?;
            let product = multiply_naive(&a, &inverse, n, n, n)?;
            let passed = matrices_equal(&product, &id, n, n, TOLERANCE);
            println!("  residual max |A*inv(A) - I| = {:.3e}", max_abs_diff(&product, &id));
            if !passed {
                eprintln!("{label}: wrong result for n = {n}");
            }
            durations_secs.push(secs_if(passed, elapsed));
        }
        matinv_rows.push(ResultRow {
            power,
            durations_secs,
        });
    }

    write_rows("matmat.txt", &matmat_rows)?;
    write_rows("matinv.txt", &matinv_rows)?;
    println!("\nResults saved to matmat.txt and matinv.txt");
    Ok(())
}

fn write_rows(path: &str, rows: &[ResultRow]) -> Result<(), MatrixError> {
    let mut writer = BufWriter::new(File::create(path)?);
    for row in rows {
        writeln!(writer, "{}", row.line())?;
    }
    writer.flush()?;
    Ok(())
}

fn run_invert(path: &str, out: Option<&str>) -> Result<(), MatrixError> {
    let matrix = read_matrix(path)?;
    if matrix.rows != matrix.cols {
        return Err(MatrixError::ShapeMismatch {
            operand: "a",
            expected: matrix.rows * matrix.rows,
            actual: matrix.data.len(),
        });
    }
    let n = matrix.rows;
    let mut last = Vec::new();
    for (label, invert) in INVERTERS {
        let inverse = invert(&matrix.data, n)?;
        println!("{label}:");
        print_matrix(&inverse, n, n);
        last = inverse;
    }
    if let Some(out) = out {
        write_matrix(out, &last, n, n)?;
        println!("Inverse saved to {out}");
    }
    Ok(())
}

fn usage() -> ExitCode {
    eprintln!("usage: strassen-kernels [sweep [N]] | invert <file> [out]");
    eprintln!("  sweep N   time all kernels for sizes 2^i - 1, i = 2..=N (default {DEFAULT_MAX_POWER})");
    eprintln!("  invert    read a matrix file, print its inverses, optionally save one to <out>");
    ExitCode::FAILURE
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    let outcome = match args.as_slice() {
        [] | ["sweep"] => run_sweep(DEFAULT_MAX_POWER),
        ["sweep", n] | [n] if n.parse::<u32>().is_ok() => match n.parse::<u32>() {
            Ok(power) if power > 0 && power < 16 => run_sweep(power),
            _ => {
                eprintln!("Invalid input for N. Please provide a positive integer below 16.");
                return ExitCode::FAILURE;
            }
        },
        ["invert", path] => run_invert(path, None),
        ["invert", path, out] => run_invert(path, Some(*out)),
        _ => return usage(),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
