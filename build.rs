fn main() {
    // `sqlx::migrate!` embeds the migrations at compile time; rebuild when
    // they change so the binary never carries a stale schema.
    println!("cargo:rerun-if-changed=migrations");
}
