//! Plugin bounty call-to-action block

use leptos::prelude::*;

use super::{BtnKind, BtnLink, BtnVariant, Paragraph};

/// Full-width call to action inviting plugin submissions.
#[component]
pub fn CtaBounty() -> impl IntoView {
    view! {
        <div class="relative mx-auto max-w-5xl w-full" data-role="cta-bounty">
            <div class="absolute top-0 inset-x-0 h-full bg-gradient-to-bl from-[#f6fafe] dark:from-gray-800"></div>
            <div class="relative gap-12 py-20 px-8 md:px-10 lg:px-14">
                <div class="absolute right-1 bottom-1 h-2/5 md:h-auto md:bottom-2 md:inset-y-2 md:w-2/5 w-5/12">
                    <img
                        src="/images/remote-working.webp"
                        alt="Illustration about remote work"
                        width="1500"
                        height="750"
                        class="w-full h-full object-cover clipTriangleBottomRight md:clipTriangleTopRight"
                    />
                    <span class="w-16 aspect-square sm:w-20 md:w-28 bg-primary clipTriangleBottomRight md:clipTriangleTopRight absolute top-1/2 -translate-y-1/2 right-1 md:right-40 lg:right-44"></span>
                </div>

                <div class="relative w-full max-w-xl md:w-3/5">
                    <h1 class="text-3xl sm:text-4xl lg:text-6xl font-bold text-title1 dark:text-white">
                        "Build now your plugin"
                    </h1>
                    <Paragraph class="pt-8">
                        "Share what you built with the community and get rewarded for it."
                    </Paragraph>

                    <div class="pt-16">
                        <BtnLink
                            text="Submit my plugin"
                            href="/submit-plugin"
                            variant=BtnVariant::Primary
                            kind=BtnKind::Fill
                        />
                    </div>
                </div>
            </div>
        </div>
    }
}
