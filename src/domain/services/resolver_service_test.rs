// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::domain::models::champion::Champion;
    use crate::domain::models::skin::{Rarity, Skin, SkinlineRef};
    use crate::domain::models::skinline::Skinline;
    use crate::domain::models::universe::Universe;
    use crate::domain::models::wiki::{WikiChampion, WikiSkin, WikiSkinData};
    use crate::domain::services::resolver_service::*;

    fn skin(id: i64, skinlines: &[i64]) -> Skin {
        Skin {
            id,
            is_base: id % 1000 == 0,
            name: format!("skin-{}", id),
            splash_path: String::new(),
            uncentered_splash_path: String::new(),
            tile_path: String::new(),
            load_screen_path: String::new(),
            rarity: Rarity::NoRarity,
            is_legacy: false,
            splash_video_path: None,
            features_text: None,
            region_rarity_id: 0,
            rarity_gem_path: None,
            skin_lines: if skinlines.is_empty() {
                None
            } else {
                Some(skinlines.iter().map(|id| SkinlineRef { id: *id }).collect())
            },
            description: None,
            chromas: None,
        }
    }

    fn champion(id: i64, name: &str) -> Champion {
        Champion {
            id,
            name: name.to_string(),
            alias: name.to_string(),
            square_portrait_path: String::new(),
            roles: Vec::new(),
        }
    }

    fn skinline(id: i64, name: &str) -> Skinline {
        Skinline {
            id,
            name: name.to_string(),
            description: String::new(),
        }
    }

    fn wiki_skin(relative_id: i64) -> WikiSkin {
        serde_json::from_value(serde_json::json!({ "id": relative_id })).unwrap()
    }

    #[test]
    fn test_sort_skins_ascending() {
        let mut by_id = HashMap::new();
        for id in [266003_i64, 266001, 266002] {
            by_id.insert(id.to_string(), skin(id, &[]));
        }
        let sorted = sort_skins(by_id);
        let ids: Vec<i64> = sorted.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![266001, 266002, 266003]);
    }

    #[test]
    fn test_skins_of_champion_selects_by_id_prefix() {
        let skins = vec![skin(103000, &[]), skin(266000, &[]), skin(266001, &[])];
        let aatrox = champion(266, "Aatrox");
        let selected = skins_of_champion(&aatrox, &skins);
        let ids: Vec<i64> = selected.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![266000, 266001]);
    }

    #[test]
    fn test_filter_universes_drops_missing_skin_sets() {
        let universes = vec![
            Universe {
                id: 1,
                name: "Runeterra".to_string(),
                description: String::new(),
                skin_sets: Some(vec![5]),
            },
            Universe {
                id: 2,
                name: "Incomplete".to_string(),
                description: String::new(),
                skin_sets: None,
            },
            Universe {
                id: 3,
                name: "Empty".to_string(),
                description: String::new(),
                skin_sets: Some(Vec::new()),
            },
        ];
        let kept = filter_universes(universes);
        let ids: Vec<i64> = kept.iter().map(|u| u.id).collect();
        // 缺失列表的被剔除，空列表保留
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_resolve_skinlines_drops_dangling_and_sorts_by_name() {
        let skinlines = vec![skinline(5, "Zenith"), skinline(9, "Blood Moon")];
        let universe = Universe {
            id: 1,
            name: "Runeterra".to_string(),
            description: String::new(),
            skin_sets: Some(vec![5, 777, 9]),
        };
        let resolved = resolve_skinlines_of_universe(&universe, &skinlines);
        let names: Vec<&str> = resolved.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Blood Moon", "Zenith"]);
    }

    #[test]
    fn test_resolve_skinlines_empty_list_yields_empty() {
        let universe = Universe {
            id: 3,
            name: "Empty".to_string(),
            description: String::new(),
            skin_sets: Some(Vec::new()),
        };
        assert!(resolve_skinlines_of_universe(&universe, &[]).is_empty());
    }

    #[test]
    fn test_skins_of_skinline() {
        let skins = vec![skin(266000, &[5]), skin(266001, &[]), skin(103001, &[5, 9])];
        let selected = skins_of_skinline(5, &skins);
        let ids: Vec<i64> = selected.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![266000, 103001]);
    }

    #[test]
    fn test_flatten_wiki_skins_uses_absolute_id() {
        let mut data = WikiSkinData::new();
        let mut skins = HashMap::new();
        skins.insert("0".to_string(), wiki_skin(0));
        skins.insert("1".to_string(), wiki_skin(1));
        data.insert("Aatrox".to_string(), WikiChampion { id: 266, skins });

        let flat = flatten_wiki_skins(&data);
        assert_eq!(flat.len(), 2);
        assert!(flat.contains_key(&266000));
        assert!(flat.contains_key(&266001));
    }

    #[test]
    fn test_skin_summaries_merge_wiki_by_id() {
        let skins = vec![skin(266000, &[]), skin(266001, &[])];
        let refs: Vec<&Skin> = skins.iter().collect();
        let mut wiki = HashMap::new();
        wiki.insert(266001_i64, wiki_skin(1));

        let summaries = skin_summaries(&refs, &wiki);
        assert!(summaries[0].wiki_skin_data.is_none());
        assert!(summaries[1].wiki_skin_data.is_some());
    }

    #[test]
    fn test_unmatched_wiki_record_contributes_nothing() {
        let skins = vec![skin(266000, &[])];
        let refs: Vec<&Skin> = skins.iter().collect();
        let mut wiki = HashMap::new();
        // 英雄999不存在于目录中
        wiki.insert(999000_i64, wiki_skin(0));

        let summaries = skin_summaries(&refs, &wiki);
        assert_eq!(summaries.len(), 1);
        assert!(summaries[0].wiki_skin_data.is_none());
    }
}
