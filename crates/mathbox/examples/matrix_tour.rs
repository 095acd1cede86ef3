//! A short tour of the matrix engine.
//!
//! Run with: cargo run --example matrix_tour

use mathbox::Matrix;

fn main() -> Result<(), mathbox::MatrixError> {
    let a = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3)?;
    let b = Matrix::from_vec(vec![7.0, 8.0, 9.0, 10.0, 11.0, 12.0], 3, 2)?;

    println!("a =\n{}\n", a);
    println!("b =\n{}\n", b);
    println!("a * b =\n{}\n", a.multiply(&b)?);
    println!("a^T =\n{}\n", a.transpose());
    println!("a padded =\n{}\n", a.zero_pad(1)?);
    println!("identity =\n{}", Matrix::identity(3)?);

    Ok(())
}
