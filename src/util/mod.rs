pub mod parse;

#[cfg(test)]
pub mod test;
