use chrono::{Duration, NaiveDate};
use consultsim_core::models::{ConsultantId, DeliverableId, DeliverableRange, TitleId};
use consultsim_synth::calendar::first_of_month;
use consultsim_synth::{ChainParams, ProgressCurveGenerator, PromotionChainGenerator, TitleLadder};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2015, 1, 1).unwrap()
}

fn ladder_ids() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(1i64..500, 0..10)
}

proptest! {
    #[test]
    fn chains_are_contiguous_promotions(seed in any::<u64>(), ids in ladder_ids(), cid in 1i64..10_000) {
        let title_ids: Vec<TitleId> = ids.into_iter().map(TitleId).collect();
        let ladder = TitleLadder::from_title_ids(&title_ids).unwrap();
        let gen = PromotionChainGenerator::new(ladder.clone(), ChainParams::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        let chain = gen.generate(&mut rng, &ConsultantId::from(cid));

        prop_assert!((1..=3).contains(&chain.len()));
        let ranks: Vec<usize> = chain.iter().map(|r| ladder.rank_of(r.title_id).unwrap()).collect();
        prop_assert!(ranks.windows(2).all(|w| w[1] == w[0] + 1));
        for pair in chain.windows(2) {
            prop_assert_eq!(pair[0].end_date, Some(pair[1].start_date));
        }
        for r in &chain[..chain.len() - 1] {
            prop_assert!(r.end_date.is_some());
        }
        let end_cap = gen.params().simulation_end;
        for r in &chain {
            prop_assert_eq!(&r.consultant_id, &ConsultantId::from(cid));
            prop_assert_eq!(r.start_date, first_of_month(r.start_date));
            if let Some(end) = r.end_date {
                prop_assert!(end <= end_cap);
            }
            let band = ladder.level(ladder.rank_of(r.title_id).unwrap()).salary;
            prop_assert!(r.salary >= band.floor());
        }
    }

    #[test]
    fn same_seed_same_chain(seed in any::<u64>()) {
        let gen = PromotionChainGenerator::new(TitleLadder::synthetic().unwrap(), ChainParams::default()).unwrap();
        let a = gen.generate(&mut StdRng::seed_from_u64(seed), &ConsultantId::from(1));
        let b = gen.generate(&mut StdRng::seed_from_u64(seed), &ConsultantId::from(1));
        prop_assert_eq!(a, b);
    }

    #[test]
    fn progress_covers_every_month(start_off in 0i64..3_000, len in 0i64..1_500, pin in any::<bool>()) {
        let start = base_date() + Duration::days(start_off);
        let end = start + Duration::days(len);
        let range = DeliverableRange {
            deliverable_id: DeliverableId(1),
            actual_start: Some(start.to_string()),
            actual_end: Some(end.to_string()),
        };
        let records = ProgressCurveGenerator::new(pin).generate(&range).unwrap();

        prop_assert!(!records.is_empty());
        prop_assert_eq!(records[0].report_month, first_of_month(start));
        prop_assert_eq!(records[records.len() - 1].report_month, first_of_month(end));
        for pair in records.windows(2) {
            prop_assert_eq!(pair[1].report_month, first_of_month(pair[0].report_month + Duration::days(32)));
            prop_assert!(pair[1].percentage_complete >= pair[0].percentage_complete);
        }
        for r in &records {
            prop_assert!((0.0..=100.0).contains(&r.percentage_complete));
        }
        if pin {
            prop_assert_eq!(records[records.len() - 1].percentage_complete, 100.0);
        }
    }

    #[test]
    fn progress_reaches_hundred_when_end_is_a_month_start(start_off in 0i64..3_000, months in 1u32..48) {
        let start = base_date() + Duration::days(start_off);
        let end = first_of_month(start)
            .checked_add_months(chrono::Months::new(months))
            .unwrap();
        let range = DeliverableRange {
            deliverable_id: DeliverableId(1),
            actual_start: Some(start.to_string()),
            actual_end: Some(end.to_string()),
        };
        let records = ProgressCurveGenerator::default().generate(&range).unwrap();
        prop_assert_eq!(records[records.len() - 1].percentage_complete, 100.0);
    }
}
