// third-party imports
use criterion::criterion_main;

const ND: &str = ":"; // name delimiter
const GROUP: &str = "keyglob";

mod wildcard;

criterion_main!(wildcard::benches);
