//! 배합비 계산. 각 재료의 비율(부 또는 %)과 목표 총량으로 재료별 양을 구한다.

use serde::{Deserialize, Serialize};

/// 비율 표기 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatioKind {
    /// 부(part) 단위 비율. 1:2:3 처럼 상대값이다.
    Parts,
    /// 백분율. 합이 100이 아니면 100으로 환산해 쓴다.
    Percentage,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub value: f64,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// 재료별 계산 결과
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portion {
    pub name: String,
    pub amount: f64,
}

/// 비율 합
pub fn total(ingredients: &[Ingredient]) -> f64 {
    ingredients.iter().map(|i| i.value).sum()
}

/// 목표 총량을 비율대로 나눈다. 비율 합이 0이면 모든 양이 0이다.
pub fn mix(ingredients: &[Ingredient], kind: RatioKind, target_total: f64) -> Vec<Portion> {
    let sum = total(ingredients);
    let share = |value: f64| -> f64 {
        if sum == 0.0 {
            return 0.0;
        }
        match kind {
            RatioKind::Parts => value / sum * target_total,
            RatioKind::Percentage => {
                let scale = 100.0 / sum;
                value * scale / 100.0 * target_total
            }
        }
    };
    ingredients
        .iter()
        .map(|i| Portion {
            name: i.name.clone(),
            amount: share(i.value),
        })
        .collect()
}

/// 합이 100이 되도록 비율을 다시 맞춘다. 합이 0 이하이면 그대로 둔다.
pub fn normalize_percentages(ingredients: &mut [Ingredient]) {
    let sum = total(ingredients);
    if sum <= 0.0 {
        return;
    }
    let scale = 100.0 / sum;
    for ingredient in ingredients.iter_mut() {
        ingredient.value *= scale;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_has_no_portions() {
        assert!(mix(&[], RatioKind::Parts, 10.0).is_empty());
    }

    #[test]
    fn normalize_leaves_zero_sum_alone() {
        let mut list = vec![Ingredient::new("a", 0.0), Ingredient::new("b", 0.0)];
        normalize_percentages(&mut list);
        assert_eq!(list[0].value, 0.0);
        assert_eq!(list[1].value, 0.0);
    }
}
