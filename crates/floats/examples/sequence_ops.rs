//! Sequence operations walkthrough.
//!
//! This example demonstrates each operation of the library:
//! - Accumulating slices in place and into a new destination
//! - Guarding against unequal lengths
//! - Constant addition and cumulative scans
//! - Stateless and stateful filters
//! - Left and right folds with a non-associative combining function

use floats::prelude::*;

fn main() -> Result<(), FloatsError> {
    println!("{}", "=".repeat(80));
    println!("floats - Sequence Operations");
    println!("{}", "=".repeat(80));
    println!();

    example_add_simple()?;
    example_add_new_slice()?;
    example_add_unequal_lengths();
    example_add_const();
    example_cumulative()?;
    example_filter();
    example_folds();

    Ok(())
}

/// Adding three slices together; the result is stored in the first slice.
fn example_add_simple() -> Result<(), FloatsError> {
    println!("Add (in place)");
    let mut s1 = vec![1.0, 2.0, 3.0, 4.0];
    let s2 = vec![5.0, 6.0, 7.0, 8.0];
    let s3 = vec![1.0, 1.0, 1.0, 1.0];

    add(&mut s1, &s2)?;
    add(&mut s1, &s3)?;

    println!("  s1 = {s1:?}");
    println!("  s2 = {s2:?}");
    println!("  s3 = {s3:?}");
    println!();
    Ok(())
}

/// Storing the result in a new container.
fn example_add_new_slice() -> Result<(), FloatsError> {
    println!("AddTo (new destination)");
    let s1 = vec![1.0, 2.0, 3.0, 4.0];
    let s2 = vec![5.0, 6.0, 7.0, 8.0];
    let s3 = vec![1.0, 1.0, 1.0, 1.0];
    let mut dst = vec![0.0; s1.len()];

    add_to(&mut dst, &s1, &s2)?;
    add(&mut dst, &s3)?;

    println!("  dst = {dst:?}");
    println!("  s1  = {s1:?}");
    println!("  s2  = {s2:?}");
    println!();
    Ok(())
}

/// Checking lengths before adding.
fn example_add_unequal_lengths() {
    println!("EqualLengths");
    let mut s1 = vec![1.0, 2.0, 3.0];
    let s2 = vec![5.0, 6.0, 7.0, 8.0];

    if equal_lengths(&[&s1, &s2]) {
        // Guarded above; cannot fail.
        let _ = add(&mut s1, &s2);
    } else {
        println!("  Unequal lengths");
    }

    if let Err(e) = add(&mut s1, &s2) {
        println!("  add refused: {e}");
    }
    println!();
}

fn example_add_const() {
    println!("AddConst");
    let mut s = vec![1.0, -2.0, 3.0, -4.0];
    add_const(5.0, &mut s);
    println!("  s = {s:?}");
    println!();
}

fn example_cumulative() -> Result<(), FloatsError> {
    println!("CumProd / CumSum");
    let s = vec![1.0, -2.0, 3.0, -4.0];
    let mut dst = vec![0.0; s.len()];

    cum_prod(&mut dst, &s)?;
    println!("  cum_prod = {dst:?}");

    cum_sum(&mut dst, &s)?;
    println!("  cum_sum  = {dst:?}");
    println!("  s        = {s:?}");
    println!();
    Ok(())
}

fn example_filter() {
    println!("Filter");
    let s = vec![1.0, 3.0, 2.0, 5.0, 6.0];
    let dst = filter(|a| a > 3.0, &s, None);
    println!("  > 3            = {dst:?}");

    // A running maximum keeps a strictly increasing subsequence.
    let s = vec![1.0, 3.0, 2.0, 6.0, 5.0];
    let mut max = f64::NEG_INFINITY;
    let dst = filter(
        |a| {
            if a > max {
                max = a;
                return true;
            }
            false
        },
        &s,
        None,
    );
    println!("  increasing     = {dst:?}");
    println!("  s              = {s:?}");
    println!();
}

fn example_folds() {
    println!("FoldLeft / FoldRight");
    let s = vec![9.0, -2.0, 21.0, 4.0];
    let combine = |a: f64, b: f64| if a < b { a * b } else { a - b };
    let initial = 5.0;

    println!("  fold_left  = {}", fold_left(combine, &s, initial));
    println!("  fold_right = {}", fold_right(combine, &s, initial));
    println!("  initial    = {initial}");
    println!("  s          = {s:?}");
}
