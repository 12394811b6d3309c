use capmat_core::{CapmatError, CAPMAT_VERSION};

pub fn execute() -> Result<(), CapmatError> {
    println!("capmat {CAPMAT_VERSION}");
    Ok(())
}
