//! 단위 변환을 넘어서는 보조 계산기를 모아둔다.
//! 밀도·질량·부피 삼각 관계와 배합(혼합비) 계산으로 구성한다.

pub mod density;
pub mod mixture;
