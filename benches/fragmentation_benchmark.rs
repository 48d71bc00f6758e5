use criterion::{black_box, criterion_group, criterion_main, Criterion};
use myanmar_rs::MyanmarTextFragmenter;

fn benchmark_fragmentation(c: &mut Criterion) {
    let fragmenter = MyanmarTextFragmenter::default();

    let sentence = concat!(
        "မင်္ဂလာပါ။ ကျွန်တော့်ဖုန်းနံပါတ်က +၉၅ (၉) ၁၂၃-၄၅၆-၇၈၉ ဖြစ်ပြီး ",
        "၀၁-၀၁-၂၀၂၀ မှာ ၅,၀၀၀ ကျပ် ပေးခဲ့သည်။"
    );
    let legacy = "ေက်ာင္းသား ၁၀ ေယာက္ ရွိသည္။";

    c.bench_function("fragment_mixed_sentence", |b| {
        b.iter(|| {
            fragmenter.fragment(black_box(sentence));
        })
    });

    c.bench_function("fragment_legacy_sentence", |b| {
        b.iter(|| {
            fragmenter.fragment(black_box(legacy));
        })
    });

    let paragraph = sentence.repeat(50);
    c.bench_function("fragment_paragraph_streaming", |b| {
        b.iter(|| fragmenter.fragments(black_box(&paragraph)).count())
    });
}

criterion_group!(benches, benchmark_fragmentation);
criterion_main!(benches);
